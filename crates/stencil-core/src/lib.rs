//! Core insert-template compiler.
//!
//! Turns one entity's ordered column metadata plus global insert policies
//! into a parameterized, conditionally-branching INSERT statement template
//! for a statement-templating engine. The compiler only emits template
//! text; it never executes a statement.
//!
//! ## Crate layout
//! - `model`: column/entity descriptors and the global insert config.
//! - `classify`: the closed key-handling classification.
//! - `fragment`: the literal fragment grammar the engine understands.
//! - `compile`: prelude, column-list and value-list stages plus the two
//!   public build operations.
//! - `error`: the single construction failure.

pub mod classify;
pub mod compile;
pub mod error;
pub mod fragment;
pub mod model;


pub use classify::{KeyStrategy, classify};
pub use compile::{build_insert, build_insert_selective};
pub use error::TemplateError;
pub use model::{
    ColumnDescriptor, ColumnKind, DRIVER_REPORTED, EntityModel, InsertConfig, KeyRetrieval,
    LogicDeleteRef,
};
