use crate::model::EntityModel;
use derive_more::Display;

///
/// KeyStrategy
///
/// Closed classification of one column's key-handling behavior. Computed
/// once per column and matched exhaustively by every compiler stage, so
/// the precedence rules live in exactly one place.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum KeyStrategy {
    /// The database assigns the value at insert time.
    AutoGenerated,
    /// A caller-supplied function computes the value before execution.
    ExternallyGenerated,
    /// The entity's soft-delete flag; insert always forces "active".
    LogicDelete,
    /// No key handling.
    Plain,
}

/// Classify the column at `index`.
///
/// Precedence is fixed: identity first, then external generator, then
/// logic-delete, then plain. A column that is both identity and the
/// logic-delete reference classifies as `AutoGenerated`; closing that
/// metadata gap is the extractor's job, not ours.
#[must_use]
pub fn classify(model: &EntityModel, index: usize) -> KeyStrategy {
    let column = &model.columns[index];

    if column.is_identity {
        KeyStrategy::AutoGenerated
    } else if column.gen_id.is_some() {
        KeyStrategy::ExternallyGenerated
    } else if model.is_logic_delete(index) {
        KeyStrategy::LogicDelete
    } else {
        KeyStrategy::Plain
    }
}
