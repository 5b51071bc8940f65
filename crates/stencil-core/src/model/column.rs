use serde::Serialize;

/// Generator tag meaning the driver reports the generated key value itself
/// after execution. Several identity columns carrying this tag describe the
/// same database feature observed from different angles, not distinct keys,
/// and are exempt from the one-key limit.
pub const DRIVER_REPORTED: &str = "driver";

///
/// ColumnDescriptor
///
/// One physical column bound to one entity property. Immutable once built;
/// the compiler only reads it. Order within `EntityModel::columns` is
/// authoritative for emission on both sides of the template.
///

#[derive(Clone, Debug, Serialize)]
pub struct ColumnDescriptor {
    /// Physical column name. Quoting/escaping, if any, is the caller's.
    pub column: String,

    /// Bound property name, used for placeholders and guard expressions.
    pub property: String,

    /// Whether this column ever participates in INSERT.
    pub insertable: bool,

    /// Whether the database assigns this column's value at insert time.
    pub is_identity: bool,

    /// Optional strategy tag: either [`DRIVER_REPORTED`] or a retrieval
    /// statement override for the generated key.
    pub generator: Option<String>,

    /// Reference to an external id-generation function. Mutually exclusive
    /// in practice with `is_identity`; the classifier enforces precedence,
    /// the data model does not.
    pub gen_id: Option<String>,

    /// Runtime type shape; only [`ColumnKind::Text`] affects guard emission.
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    /// Whether the generator tag is the driver-reported marker.
    #[must_use]
    pub fn is_driver_reported(&self) -> bool {
        self.generator.as_deref() == Some(DRIVER_REPORTED)
    }
}

///
/// ColumnKind
///
/// Minimal type surface needed by guard emission; a lossy projection of the
/// source schema's types.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ColumnKind {
    Blob,
    Bool,
    Float,
    Int,
    Other,
    Text,
    Timestamp,
    Uint,
}

impl ColumnKind {
    /// Whether the non-empty guard policy applies to this shape.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}
