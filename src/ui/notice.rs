use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::app::{Message, Notice, NoticeKind};

/// Banner for the current notice, with a dismiss button
pub fn view(notice: &Notice) -> Element<'_, Message> {
    let label = text(&notice.text).size(15);
    let label = match notice.kind {
        NoticeKind::Info => label,
        NoticeKind::Success => label.style(text::success),
        NoticeKind::Error => label.style(text::danger),
    };

    container(
        row![
            container(label).width(Length::Fill),
            button("Dismiss")
                .on_press(Message::DismissNotice)
                .style(button::text),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([10, 20])
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}
