use iced::widget::{button, column, container, row, text, Column};
use iced::{Element, Length};

use crate::app::Message;
use crate::route::Route;
use crate::state::content::{ADOPTION_STEPS, FAQS, PROMISES};
use crate::state::filter::Criteria;
use crate::ui::heading;

pub fn view<'a>() -> Element<'a, Message> {
    let steps = Column::with_children(ADOPTION_STEPS.iter().enumerate().map(|(i, step)| {
        row![
            text(format!("{:02}", i + 1)).size(40).style(text::primary),
            column![text(step.title).size(24), text(step.description).size(15)].spacing(6),
        ]
        .spacing(20)
        .into()
    }))
    .spacing(28);

    let promises = Column::with_children(
        PROMISES
            .iter()
            .map(|p| text(format!("✓ {p}")).size(16).into()),
    )
    .spacing(6);

    let faqs = Column::with_children(FAQS.iter().map(|faq| {
        container(
            column![
                text(faq.question).size(17),
                text(faq.answer).size(14).style(text::secondary),
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
            "How Adoption Works",
            Some("Bringing home a rescued pet is simple. Here's what to expect.")
        ),
        steps,
        text("Our Promise").size(26),
        promises,
        text("Frequently Asked Questions").size(26),
        faqs,
        row![
            button("Start Browsing")
                .on_press(Message::Navigate(Route::Adopt(Criteria::default())))
                .style(button::primary),
            button("List a Pet")
                .on_press(Message::Navigate(Route::ListPet))
                .style(button::secondary),
        ]
        .spacing(12),
    ]
    .spacing(24)
    .into()
}
