use crate::model::column::ColumnDescriptor;
use serde::Serialize;

///
/// EntityModel
///
/// Ordered column metadata for one entity, as resolved by metadata
/// extraction. The column order is iteration-stable and determines both
/// column-list and value-list emission order; consumers on both sides of
/// the generated template must observe the same order or the fragments
/// lose positional correspondence.
///

#[derive(Clone, Debug, Serialize)]
pub struct EntityModel {
    /// Logical entity name, used in diagnostics.
    pub entity: String,

    /// Resolved physical table name.
    pub table: String,

    /// Ordered descriptor set.
    pub columns: Vec<ColumnDescriptor>,

    /// The resolved soft-delete column, if the entity has one.
    pub logic_delete: Option<LogicDeleteRef>,
}

impl EntityModel {
    /// Whether `index` is the resolved logic-delete column.
    ///
    /// Identity comparison against the single resolved reference, not a
    /// name comparison.
    #[must_use]
    pub fn is_logic_delete(&self, index: usize) -> bool {
        self.logic_delete
            .as_ref()
            .is_some_and(|flag| flag.index == index)
    }
}

///
/// LogicDeleteRef
///
/// Identity of the soft-delete column plus the literal an insert must force
/// for the "active" state. The literal's semantics belong to the
/// logical-delete layer; only its text is consumed here.
///

#[derive(Clone, Debug, Serialize)]
pub struct LogicDeleteRef {
    /// Index into `EntityModel::columns`.
    pub index: usize,

    /// Literal emitted as the column's insert value.
    pub active_value: String,
}
