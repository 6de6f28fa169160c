//! HTTP handlers

pub mod health;
pub mod questions;
pub mod state;

pub use health::health;
pub use state::state;
