//! Mise Core - Fundamental types
//!
//! This crate provides the core types used throughout Mise:
//! - `Value`: Runtime values exchanged with plugin functions
//! - `UnitSystem`: US customary or metric
//! - `MiseError`: Structured errors reported by the outer surfaces

mod value;
mod system;
mod error;

pub use value::Value;
pub use system::{UnitSystem, UnitSystemError};
pub use error::{MiseError, ErrorContext, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, UnitSystem, MiseError, Severity};
    pub use crate::error::codes;
}
