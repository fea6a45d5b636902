/// Screens and shared widgets
pub mod notice;
pub mod pages;
pub mod pet_card;
pub mod shell;

use iced::widget::{column, text};
use iced::Element;

use crate::app::Message;

/// Large page title with an optional subtitle
pub fn heading<'a>(title: &'a str, subtitle: Option<&'a str>) -> Element<'a, Message> {
    column![text(title).size(32)]
        .push_maybe(subtitle.map(|s| text(s).size(16).style(text::secondary)))
        .spacing(6)
        .into()
}

/// A labelled input with its validation message underneath
pub fn field<'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    column![text(label).size(14), input.into()]
        .push_maybe(error.map(|e| text(e).size(12).style(text::danger)))
        .spacing(4)
        .into()
}
