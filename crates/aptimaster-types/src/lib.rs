//! AptiMaster Types - Pure type definitions shared across the backend
//!
//! This crate contains only plain data types with no async runtime
//! dependencies, so it can be reused by any future frontend or tooling
//! crate without dragging the server stack along.

pub mod question;
pub mod submission;

pub use question::*;
pub use submission::*;
