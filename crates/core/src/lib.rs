//! Shared domain types for the polls backend.

pub mod error;
pub mod roles;
pub mod types;
