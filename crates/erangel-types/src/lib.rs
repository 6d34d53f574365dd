//! Shared domain types for the Erangel telemetry toolkit.

pub mod config;
pub mod entities;
pub mod events;
pub mod telemetry;
pub mod vocabulary;

mod errors;

pub use errors::{ErangelError, Result};
