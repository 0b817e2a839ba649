//! Shared domain types and errors for the holocron backend.

pub mod error;
pub mod types;
