//! Global media bias dashboard.
//!
//! Loads a static table of geotagged, sentiment-scored articles and, for a
//! location filter, ranks news sources by their average score.

pub mod app;
pub mod classify;
pub mod color;
pub mod config;
pub mod data;
pub mod roulette;
pub mod state;
pub mod ui;
