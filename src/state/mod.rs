/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The offline SQLite catalog (library.rs)
/// - Built-in listings and marketing content (seed.rs, content.rs)
/// - Browse filtering (filter.rs)
/// - Intake form field bags and step tracking (forms.rs, wizard.rs)

pub mod content;
pub mod data;
pub mod filter;
pub mod forms;
pub mod library;
pub mod seed;
pub mod wizard;
