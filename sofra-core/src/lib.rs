//! Core library for sofra, a local-first Ramadan organizer.
//!
//! - `model`: events, guests, recipes, shopping items and preferences
//! - `store`: the persisted store that owns every collection
//! - `calendar`: pure date arithmetic (month grid, week view, countdown)
//! - `prayer`: prayer-time lookup against the Aladhan API
//! - `ticker`: a cancellable once-per-second countdown task

pub mod calendar;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod prayer;
pub mod store;
pub mod ticker;

pub use error::{SofraError, SofraResult};
