//! Core namespace types and utilities

mod error;
mod path;
mod types;

pub use error::*;
pub use path::*;
pub use types::*;
