//! Domain models for the FarmHelp forms

mod account;
mod recommendation;
mod soil;

pub use account::*;
pub use recommendation::*;
pub use soil::*;
