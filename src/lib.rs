//! folio: a terminal portfolio browser.
//!
//! Five pages behind a persistent navigation bar, with a responsive
//! narrow/wide presentation, eased scroll-to-top on navigation, and a
//! contact form. State lives in [`app::App`]; [`ui::render`] paints it.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod links;
pub mod state;
pub mod ui;
