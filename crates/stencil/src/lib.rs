//! Public facade over the insert-template compiler.
//!
//! Re-exports the core surface and provides a `prelude` for callers that
//! want the whole build-side vocabulary in scope at once.

pub use stencil_core as core;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use stencil_core::{TemplateError, build_insert, build_insert_selective};

///
/// Prelude
///

pub mod prelude {
    pub use stencil_core::{
        ColumnDescriptor, ColumnKind, DRIVER_REPORTED, EntityModel, InsertConfig, KeyRetrieval,
        KeyStrategy, LogicDeleteRef, TemplateError, build_insert, build_insert_selective, classify,
    };
}
