use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::route::Route;
use crate::state::filter::Criteria;

pub fn view(path: &str) -> Element<'_, Message> {
    column![
        text("404").size(72),
        text("Oops! This page has wandered off.").size(24),
        text(format!("Nothing lives at \"{path}\".")).style(text::secondary),
        row![
            button("Go Home")
                .on_press(Message::Navigate(Route::Home))
                .style(button::primary),
            button("Browse Pets")
                .on_press(Message::Navigate(Route::Adopt(Criteria::default())))
                .style(button::secondary),
        ]
        .spacing(12),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}
