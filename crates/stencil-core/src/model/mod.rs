//! Entity and column metadata consumed by the template compiler.
//!
//! Everything in this module is supplied by metadata extraction and is
//! treated as read-only for the duration of a build. The compiler performs
//! no validation here beyond the single cardinality rule it owns
//! (see `compile::prelude`).

mod column;
mod config;
mod entity;


pub use column::{ColumnDescriptor, ColumnKind, DRIVER_REPORTED};
pub use config::{InsertConfig, KeyRetrieval};
pub use entity::{EntityModel, LogicDeleteRef};
