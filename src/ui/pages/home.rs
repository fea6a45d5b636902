use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::app::{Message, PawAdopt};
use crate::route::Route;
use crate::state::content::{format_stat, ADOPTION_STEPS, PROMISES, STATS, TESTIMONIALS};
use crate::state::data::{Species, Status};
use crate::state::filter::Criteria;
use crate::ui::{heading, pet_card};

/// Listings shown in the "featured" strip
const FEATURED: usize = 3;

pub fn view(app: &PawAdopt) -> Element<'_, Message> {
    column![
        hero(),
        species_shortcuts(),
        featured(app),
        stats(),
        steps(),
        testimonials(),
        promises(),
    ]
    .spacing(40)
    .into()
}

fn hero<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Find Your Perfect Companion").size(44),
            text(
                "Every pet deserves a loving home. Browse rescued dogs and cats from NGOs and \
                 foster families near you, or list a pet that needs a family."
            )
            .size(18),
            row![
                button(text("Find a Pet").size(18))
                    .on_press(Message::Navigate(Route::Adopt(Criteria::default())))
                    .padding(12)
                    .style(button::primary),
                button(text("List a Pet").size(18))
                    .on_press(Message::Navigate(Route::ListPet))
                    .padding(12)
                    .style(button::secondary),
            ]
            .spacing(12),
        ]
        .spacing(16)
        .max_width(720),
    )
    .padding(32)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

fn species_shortcuts<'a>() -> Element<'a, Message> {
    let shortcuts = Species::ALL.iter().map(|&species| {
        let mut criteria = Criteria::default();
        criteria.toggle_species(species);
        button(text(format!("Browse {}s", species.label())).size(16))
            .on_press(Message::Navigate(Route::Adopt(criteria)))
            .style(button::secondary)
            .into()
    });
    Row::with_children(shortcuts).spacing(12).into()
}

fn featured(app: &PawAdopt) -> Element<'_, Message> {
    let section = column![heading("Pets Looking for a Home", None)].spacing(16);

    if app.is_loading() {
        return section.push(text("Loading pets…")).into();
    }

    let pets: Vec<_> = app
        .listings()
        .iter()
        .filter(|pet| pet.status == Status::Available)
        .take(FEATURED)
        .collect();

    let section = if pets.is_empty() {
        section.push(text("No pets are listed yet. Be the first to list one!"))
    } else {
        section.push(pet_card::grid(app, &pets))
    };

    section
        .push(
            button("View all pets")
                .on_press(Message::Navigate(Route::Adopt(Criteria::default())))
                .style(button::text),
        )
        .into()
}

fn stats<'a>() -> Element<'a, Message> {
    let items = STATS.iter().map(|stat| {
        column![
            text(format_stat(stat.value)).size(32),
            text(stat.label).size(14).style(text::secondary),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    });
    container(Row::with_children(items).spacing(16))
        .padding(24)
        .style(container::rounded_box)
        .into()
}

fn steps<'a>() -> Element<'a, Message> {
    let items = ADOPTION_STEPS.iter().enumerate().map(|(i, step)| {
        column![
            text(format!("{}. {}", i + 1, step.title)).size(20),
            text(step.description).size(14),
        ]
        .spacing(6)
        .width(Length::Fill)
        .into()
    });

    column![
        heading("How Adoption Works", Some("Three simple steps to a new best friend")),
        Row::with_children(items).spacing(24),
        button("Learn more")
            .on_press(Message::Navigate(Route::HowItWorks))
            .style(button::text),
    ]
    .spacing(16)
    .into()
}

fn testimonials<'a>() -> Element<'a, Message> {
    let items = TESTIMONIALS.iter().map(|t| {
        container(
            column![
                text(format!("“{}”", t.quote)).size(14),
                text(format!("{}, {}", t.name, t.location)).size(14),
                text(format!("Adopted {}", t.pet_name))
                    .size(12)
                    .style(text::secondary),
            ]
            .spacing(8),
        )
        .padding(16)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
    });

    column![
        heading("Happy Tails", Some("Stories from families who adopted through PawAdopt")),
        Row::with_children(items).spacing(16),
    ]
    .spacing(16)
    .into()
}

fn promises<'a>() -> Element<'a, Message> {
    let items = PROMISES.iter().map(|p| text(format!("✓ {p}")).size(16).into());
    Column::with_children(items).spacing(6).into()
}
