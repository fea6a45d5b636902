use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Element, Length};

use crate::app::{Message, PawAdopt};
use crate::state::forms::{ContactField, ContactForm, InquiryType};
use crate::state::wizard::Wizard;
use crate::ui::{field, heading};

pub fn view(app: &PawAdopt) -> Element<'_, Message> {
    let wizard = app.contact_wizard();

    let body = if wizard.is_submitted() {
        sent()
    } else {
        form(wizard)
    };

    row![
        column![
            heading(
                "Get in Touch",
                Some("Questions about adoption, listing or partnering with us?")
            ),
            container(body).padding(20).style(container::bordered_box),
        ]
        .spacing(20)
        .width(Length::FillPortion(3)),
        reach_us(),
    ]
    .spacing(32)
    .into()
}

fn input<'a>(placeholder: &'a str, value: &'a str, field: ContactField) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |v| Message::ContactInput(field, v))
        .padding(8)
        .into()
}

fn form(wizard: &Wizard<ContactForm>) -> Element<'_, Message> {
    let form = &wizard.form;
    let submit_label = if wizard.is_submitting() {
        "Sending…"
    } else {
        "Send Message"
    };

    column![
        row![
            field(
                "Name",
                input("Full name", &form.name, ContactField::Name),
                wizard.error_for("name"),
            ),
            field(
                "Email",
                input("you@example.com", &form.email, ContactField::Email),
                wizard.error_for("email"),
            ),
        ]
        .spacing(16),
        row![
            field(
                "Phone (optional)",
                input("+91 98765 43210", &form.phone, ContactField::Phone),
                None,
            ),
            field(
                "Inquiry type",
                pick_list(InquiryType::ALL, form.inquiry_type, Message::ContactType)
                    .placeholder("Choose…")
                    .width(Length::Fill),
                None,
            ),
        ]
        .spacing(16),
        field(
            "Subject",
            input("What is this about?", &form.subject, ContactField::Subject),
            wizard.error_for("subject"),
        ),
        field(
            "Message",
            input("Your message", &form.message, ContactField::Message),
            wizard.error_for("message"),
        ),
        button(text(submit_label))
            .on_press_maybe((!wizard.is_submitting()).then_some(Message::SubmitContact))
            .padding(10)
            .style(button::primary),
    ]
    .spacing(14)
    .into()
}

fn sent<'a>() -> Element<'a, Message> {
    column![
        text("Message sent!").size(24).style(text::success),
        text("Thanks for reaching out. Our team usually replies within two working days."),
        button("Send another message")
            .on_press(Message::ContactReset)
            .style(button::secondary),
    ]
    .spacing(12)
    .into()
}

fn reach_us<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Reach us directly").size(20),
            text("Email: hello@pawadopt.in").size(14),
            text("Phone: +91 22 4000 1234").size(14),
            text("Office: Andheri West, Mumbai, Maharashtra").size(14),
            text("Mon to Sat, 10 AM to 6 PM").size(13).style(text::secondary),
        ]
        .spacing(8),
    )
    .padding(20)
    .width(Length::FillPortion(2))
    .style(container::rounded_box)
    .into()
}
