use iced::widget::{button, checkbox, column, container, pick_list, row, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use crate::app::{Message, PawAdopt};
use crate::route::Route;
use crate::state::data::{Gender, Species};
use crate::state::forms::{ListingField, ListingFlag, ListingForm, MAX_PHOTOS};
use crate::state::seed::CITIES;
use crate::state::wizard::{StepForm, Wizard};
use crate::ui::{field, heading};

pub fn view(app: &PawAdopt) -> Element<'_, Message> {
    let wizard = app.listing_wizard();

    if wizard.is_submitted() {
        return submitted();
    }

    let body = match wizard.step() {
        1 => pet_info(wizard),
        2 => photos(wizard),
        3 => details(wizard),
        _ => contact(wizard),
    };

    column![
        heading(
            "List a Pet for Adoption",
            Some("Help a rescued pet find a loving family")
        ),
        progress(wizard),
        container(column![
            text(format!(
                "Step {} of {}: {}",
                wizard.step(),
                wizard.step_count(),
                wizard.step_title()
            ))
            .size(20),
            body,
        ]
        .spacing(16))
            .padding(20)
            .width(Length::Fill)
            .style(container::bordered_box),
        controls(wizard),
    ]
    .spacing(20)
    .max_width(820)
    .into()
}

fn progress(wizard: &Wizard<ListingForm>) -> Element<'_, Message> {
    let current = wizard.step();
    let steps = (1..=wizard.step_count()).map(|step| {
        let title = ListingForm::STEPS[step - 1];
        let label = text(format!("{step}. {title}")).size(14);
        let label = if step == current {
            label.style(text::primary)
        } else if step < current {
            label.style(text::success)
        } else {
            label.style(text::secondary)
        };
        label.into()
    });
    Row::with_children(steps).spacing(24).into()
}

fn controls(wizard: &Wizard<ListingForm>) -> Element<'_, Message> {
    let editable = !wizard.is_submitting();

    let back = button("Back")
        .on_press_maybe((editable && wizard.step() > 1).then_some(Message::ListingBack))
        .style(button::secondary);

    let forward = if wizard.is_last_step() {
        let label = if wizard.is_submitting() {
            "Submitting…"
        } else {
            "Submit Listing"
        };
        button(text(label)).on_press_maybe(editable.then_some(Message::SubmitListing))
    } else {
        button("Next").on_press(Message::ListingNext)
    };

    row![
        back,
        container(forward.style(button::primary))
            .width(Length::Fill)
            .align_right(Length::Fill),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn input<'a>(placeholder: &'a str, value: &'a str, field: ListingField) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |v| Message::ListingInput(field, v))
        .padding(8)
        .into()
}

fn flag<'a>(label: &'a str, value: bool, flag: ListingFlag) -> Element<'a, Message> {
    checkbox(label, value)
        .on_toggle(move |v| Message::ListingFlag(flag, v))
        .into()
}

fn pet_info(wizard: &Wizard<ListingForm>) -> Element<'_, Message> {
    let form = &wizard.form;
    let city = CITIES
        .iter()
        .copied()
        .find(|c| form.city.as_deref() == Some(*c));

    column![
        field(
            "Pet name",
            input("e.g. Bruno", &form.pet_name, ListingField::PetName),
            wizard.error_for("pet_name"),
        ),
        row![
            field(
                "Pet type",
                pick_list(Species::ALL, form.species, Message::ListingSpecies)
                    .placeholder("Choose…")
                    .width(Length::Fill),
                wizard.error_for("species"),
            ),
            field(
                "Gender",
                pick_list(Gender::ALL, form.gender, Message::ListingGender)
                    .placeholder("Choose…")
                    .width(Length::Fill),
                None,
            ),
        ]
        .spacing(16),
        field(
            "Breed",
            input("e.g. Indie, Labrador Mix", &form.breed, ListingField::Breed),
            wizard.error_for("breed"),
        ),
        field(
            "Age",
            input("e.g. 8 months, 2 years", &form.age, ListingField::Age),
            wizard.error_for("age"),
        ),
        field(
            "City",
            pick_list(CITIES, city, Message::ListingCity)
                .placeholder("Choose a city…")
                .width(Length::Fill),
            None,
        ),
        row![
            flag("Vaccinated", form.vaccinated, ListingFlag::Vaccinated),
            flag("Neutered / spayed", form.neutered, ListingFlag::Neutered),
        ]
        .spacing(24),
    ]
    .spacing(14)
    .into()
}

fn photos(wizard: &Wizard<ListingForm>) -> Element<'_, Message> {
    let form = &wizard.form;

    let picked = Column::with_children(form.photos.iter().enumerate().map(|(i, path)| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        row![
            text(name).size(14).width(Length::Fill),
            button(text("Remove").size(13))
                .on_press(Message::RemovePhoto(i))
                .style(button::danger),
        ]
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(6);

    let add = button("Add photos…").style(button::secondary).on_press_maybe(
        (form.photos.len() < MAX_PHOTOS).then_some(Message::PickPhotos),
    );

    column![
        text(format!(
            "Add up to {MAX_PHOTOS} photos. Clear, well-lit photos help pets get adopted faster."
        ))
        .size(14),
        add,
        text(format!("{} of {MAX_PHOTOS} photos selected", form.photos.len()))
            .size(13)
            .style(text::secondary),
        picked,
    ]
    .push_maybe(
        wizard
            .error_for("photos")
            .map(|e| text(e).size(12).style(text::danger)),
    )
    .spacing(12)
    .into()
}

fn details(wizard: &Wizard<ListingForm>) -> Element<'_, Message> {
    let form = &wizard.form;

    column![
        field(
            "Description",
            input(
                "Tell families about this pet's story and routine",
                &form.description,
                ListingField::Description,
            ),
            wizard.error_for("description"),
        ),
        field(
            "Personality traits (comma separated)",
            input("Playful, Friendly, Calm", &form.personality, ListingField::Personality),
            None,
        ),
        field(
            "Health notes",
            input(
                "Vaccinations, treatments, special needs",
                &form.health_notes,
                ListingField::HealthNotes,
            ),
            None,
        ),
        text("Compatibility").size(14),
        row![
            flag("Good with kids", form.compatibility.kids, ListingFlag::GoodWithKids),
            flag(
                "Good with other pets",
                form.compatibility.other_pets,
                ListingFlag::GoodWithPets
            ),
            flag(
                "Apartment friendly",
                form.compatibility.apartment,
                ListingFlag::ApartmentFriendly
            ),
        ]
        .spacing(24),
    ]
    .spacing(14)
    .into()
}

fn contact(wizard: &Wizard<ListingForm>) -> Element<'_, Message> {
    let form = &wizard.form;

    column![
        field(
            "Your name",
            input("Full name", &form.contact_name, ListingField::ContactName),
            wizard.error_for("contact_name"),
        ),
        field(
            "Organization (optional)",
            input("NGO or shelter name", &form.organization, ListingField::Organization),
            None,
        ),
        field(
            "Phone",
            input("+91 98765 43210", &form.contact_phone, ListingField::ContactPhone),
            wizard.error_for("contact_phone"),
        ),
        field(
            "Email",
            input("you@example.com", &form.contact_email, ListingField::ContactEmail),
            wizard.error_for("contact_email"),
        ),
    ]
    .spacing(14)
    .into()
}

fn submitted<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Listing submitted!").size(32).style(text::success),
            text("Thank you for helping a pet find a home. Your listing is now live."),
            row![
                button("List another pet")
                    .on_press(Message::ListAnother)
                    .style(button::primary),
                button("Browse pets")
                    .on_press(Message::Navigate(Route::Adopt(Default::default())))
                    .style(button::secondary),
            ]
            .spacing(12),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .center_x(Length::Fill)
    .into()
}
