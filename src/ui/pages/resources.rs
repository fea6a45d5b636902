use iced::widget::{button, column, container, text, Column, Row};
use iced::{Element, Length};

use crate::app::{Message, PawAdopt};
use crate::state::content::{articles_in, ARTICLE_CATEGORIES};
use crate::ui::heading;

pub fn view(app: &PawAdopt) -> Element<'_, Message> {
    let selected = app.resource_category();

    let all = button("All")
        .on_press(Message::ResourceCategory(None))
        .style(if selected.is_none() {
            button::primary
        } else {
            button::secondary
        });
    let categories = ARTICLE_CATEGORIES.iter().map(|&category| {
        let tab = button(category)
            .on_press(Message::ResourceCategory(Some(category)))
            .style(if selected == Some(category) {
                button::primary
            } else {
                button::secondary
            });
        Element::from(tab)
    });
    let tabs = Row::with_children(std::iter::once(Element::from(all)).chain(categories))
        .spacing(8);

    let articles = Column::with_children(articles_in(selected).map(|article| {
        container(
            column![
                text(article.category).size(12).style(text::primary),
                text(article.title).size(20),
                text(article.excerpt).size(14),
                text(article.read_time).size(12).style(text::secondary),
            ]
            .spacing(6),
        )
        .padding(16)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
    }))
    .spacing(12);

    column![
        heading(
            "Pet Care Resources",
            Some("Guides and tips to help you give your new companion the best life")
        ),
        tabs,
        articles,
    ]
    .spacing(20)
    .into()
}
