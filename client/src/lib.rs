//! FarmHelp command-line client
//!
//! Validates soil samples and account form values locally and requests crop
//! recommendations from the FarmHelp prediction service.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod external;
pub mod terminal;

pub use crate::config::Config;
pub use error::{AppError, AppResult};
