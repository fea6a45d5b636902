use iced::widget::{button, column, container, row, text, Row};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::route::Route;
use crate::state::content::{format_stat, PARTNERS, STATS, TESTIMONIALS};
use crate::state::filter::Criteria;
use crate::ui::heading;

pub fn view<'a>() -> Element<'a, Message> {
    column![
        heading(
            "Every Pet Deserves a Loving Home",
            Some(
                "PawAdopt was born from a simple belief: that every rescued animal deserves a \
                 second chance at happiness, and every family deserves the unconditional love \
                 that a pet can bring."
            )
        ),
        button("Start Adopting")
            .on_press(Message::Navigate(Route::Adopt(Criteria::default())))
            .style(button::primary),
        row![
            panel(
                "Our Mission",
                "To create a compassionate bridge between rescued animals and loving families \
                 across India. We strive to make pet adoption accessible, transparent, and \
                 joyful while supporting the incredible work of animal rescue organizations \
                 nationwide."
            ),
            panel(
                "Our Vision",
                "A world where every stray animal finds a home, every rescue organization has \
                 the support they need, and pet adoption is the first choice for families \
                 looking to add a furry member. Together, we can end pet homelessness."
            ),
        ]
        .spacing(24),
        impact(),
        partners(),
        stories(),
    ]
    .spacing(32)
    .into()
}

fn panel<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    container(column![text(title).size(24), text(body).size(15)].spacing(10))
        .padding(24)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn impact<'a>() -> Element<'a, Message> {
    let stats = Row::with_children(STATS.iter().map(|stat| {
        column![
            text(format_stat(stat.value)).size(36),
            text(stat.label).size(14).style(text::secondary),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    }));

    column![
        text("Our Impact").size(28),
        text("Together, we're making a difference, one adoption at a time.")
            .style(text::secondary),
        stats,
    ]
    .spacing(12)
    .into()
}

fn partners<'a>() -> Element<'a, Message> {
    let names = Row::with_children(PARTNERS.iter().map(|name| {
        container(text(*name).size(14))
            .padding(16)
            .style(container::bordered_box)
            .into()
    }))
    .spacing(12);

    column![
        text("Trusted Rescue Organizations").size(28),
        text(
            "We work with verified animal welfare organizations and rescue groups across India \
             to ensure every listed pet comes from a trusted source."
        )
        .style(text::secondary),
        names,
        row![
            text("Are you an NGO or rescue organization?"),
            button("Partner with Us")
                .on_press(Message::Navigate(Route::Contact))
                .style(button::secondary),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    ]
    .spacing(12)
    .into()
}

fn stories<'a>() -> Element<'a, Message> {
    let items = Row::with_children(TESTIMONIALS.iter().map(|t| {
        container(
            column![
                text(format!("“{}”", t.quote)).size(14),
                text(format!("{} from {} adopted {}", t.name, t.location, t.pet_name))
                    .size(13)
                    .style(text::secondary),
            ]
            .spacing(8),
        )
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
    }))
    .spacing(16);

    column![text("Happy Tails").size(28), items].spacing(12).into()
}
