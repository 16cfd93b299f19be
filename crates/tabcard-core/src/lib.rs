//! Shared configuration, errors, and vocabulary for the tabcard workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
