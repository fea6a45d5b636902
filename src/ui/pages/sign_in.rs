use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length};

use crate::app::{Message, PawAdopt};
use crate::ui::{field, heading};

pub fn view(app: &PawAdopt) -> Element<'_, Message> {
    if app.backend().is_offline() {
        return column![
            heading("Sign In", None),
            text(
                "Accounts are only available when connected to the hosted backend. \
                 In offline mode your favorites are saved on this device."
            ),
        ]
        .spacing(16)
        .into();
    }

    if let Some(session) = app.session() {
        return column![
            heading("Signed In", None),
            text(format!("You are signed in as {}", session.email)),
            button("Sign out")
                .on_press(Message::SignOut)
                .style(button::secondary),
        ]
        .spacing(16)
        .into();
    }

    let form = app.sign_in_form();
    let submit = (!form.pending).then_some(Message::SubmitSignIn);

    container(
        column![
            heading("Welcome Back", Some("Sign in to save favorites and list pets")),
            field(
                "Email",
                text_input("you@example.com", &form.email)
                    .on_input(Message::SignInEmail)
                    .on_submit_maybe(submit.clone())
                    .padding(8),
                None,
            ),
            field(
                "Password",
                text_input("Password", &form.password)
                    .secure(true)
                    .on_input(Message::SignInPassword)
                    .on_submit_maybe(submit.clone())
                    .padding(8),
                form.error.as_deref(),
            ),
            button(text(if form.pending { "Signing in…" } else { "Sign In" }))
                .on_press_maybe(submit)
                .padding(10)
                .style(button::primary),
        ]
        .spacing(14),
    )
    .max_width(420)
    .width(Length::Fill)
    .into()
}
