//! PawAdopt: a desktop client for browsing, listing and adopting rescued pets.

pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod media;
pub mod route;
pub mod state;
pub mod ui;

pub use app::{Message, PawAdopt};
pub use error::{Error, Result};
