//! Mise Plugin System
//!
//! Provides the trait for exposing kitchen computations as named functions,
//! the registry that holds them, and the context they are evaluated in.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::{EvalContext, Preferences, UNIT_SYSTEM_VAR, SERVING_MULTIPLIER_VAR};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, FunctionMeta, ArgMeta,
        PluginRegistry, EvalContext, Preferences,
    };
    pub use mise_core::prelude::*;
}
