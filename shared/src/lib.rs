//! Shared types and logic for the FarmHelp forms
//!
//! This crate contains the models, validators and submission pipeline used
//! by both the browser module (via WASM) and the command-line client.

pub mod enrichment;
pub mod error;
pub mod models;
pub mod submission;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use submission::*;
pub use types::*;
pub use validation::*;
pub use validator::{Validate, ValidationErrors};
