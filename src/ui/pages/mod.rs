pub mod about;
pub mod adopt;
pub mod contact;
pub mod favorites;
pub mod home;
pub mod how_it_works;
pub mod list_pet;
pub mod not_found;
pub mod pet_details;
pub mod resources;
pub mod sign_in;

use iced::Element;

use crate::app::{Message, PawAdopt};
use crate::route::Route;

/// The screen for the current route
pub fn view(app: &PawAdopt) -> Element<'_, Message> {
    match app.route() {
        Route::Home => home::view(app),
        Route::Adopt(_) => adopt::view(app),
        Route::PetDetails(_) => pet_details::view(app),
        Route::ListPet => list_pet::view(app),
        Route::HowItWorks => how_it_works::view(),
        Route::About => about::view(),
        Route::Resources => resources::view(app),
        Route::Contact => contact::view(app),
        Route::Favorites => favorites::view(app),
        Route::SignIn => sign_in::view(app),
        Route::NotFound(path) => not_found::view(path),
    }
}
