//! Template compilation stages.
//!
//! A build runs the prelude emitter once, then the column-list and
//! value-list compilers over the same stable column order, concatenating
//! everything into one template string. The stages share classification
//! through `classify` so none of them re-derives key-handling rules.

mod builder;
mod columns;
mod prelude;
mod values;

#[cfg(test)]
mod tests;

pub use builder::{build_insert, build_insert_selective};
