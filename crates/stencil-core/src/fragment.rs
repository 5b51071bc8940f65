//! Template fragment grammar.
//!
//! The literal text forms understood by the statement-templating engine:
//! named placeholders, conditional-inclusion directives, trim wrappers,
//! pre-statement binds, and generated-key capture. Every byte of emitted
//! template text is produced here so the grammar lives in one place.

use crate::model::{ColumnKind, KeyRetrieval};

/// Opens the column-name list. Entries carry trailing commas; the engine
/// strips the last one.
pub const TRIM_COLUMNS_OPEN: &str = "<trim prefix=\"(\" suffix=\")\" suffixOverrides=\",\">";

/// Opens the placeholder list.
pub const TRIM_VALUES_OPEN: &str = "<trim prefix=\"VALUES(\" suffix=\")\" suffixOverrides=\",\">";

pub const TRIM_CLOSE: &str = "</trim>";

/// Portable fallback type tag for explicit null placeholders. Databases
/// that reject untyped nulls in a parameter position accept this one.
pub const NULL_TYPE_TAG: &str = "VARCHAR";

/// Suffix appended to a property name for the cached-original-value bind.
pub const CACHE_SUFFIX: &str = "_cache";

/// Suffix appended to a property name for the external-generation bind.
pub const GEN_SUFFIX: &str = "_gen";

/// Entry point the engine invokes for external id generation.
pub const GEN_ID_FN: &str = "genId";

/// Statement head. Trailing space separates it from the column list.
#[must_use]
pub fn insert_into(table: &str) -> String {
    format!("INSERT INTO {table} ")
}

/// `#{name}` — a placeholder bound to a named property or bind output.
#[must_use]
pub fn holder(name: &str) -> String {
    format!("#{{{name}}}")
}

/// `#{name,jdbcType=VARCHAR}` — an explicit null with the portable tag.
#[must_use]
pub fn typed_null(name: &str) -> String {
    format!("#{{{name},jdbcType={NULL_TYPE_TAG}}}")
}

/// `<if test="TEST">BODY</if>` — conditional inclusion over row state.
#[must_use]
pub fn if_test(test: &str, body: &str) -> String {
    format!("<if test=\"{test}\">{body}</if>")
}

/// `<bind name="NAME" value="VALUE"/>` — pre-statement value binding.
#[must_use]
pub fn bind(name: &str, value: &str) -> String {
    format!("<bind name=\"{name}\" value=\"{value}\"/>")
}

/// Generated-key capture directive, assigning the retrieved value back
/// onto `property` before or after the statement body runs.
#[must_use]
pub fn select_key(property: &str, order: KeyRetrieval, sql: &str) -> String {
    format!("<selectKey keyProperty=\"{property}\" order=\"{order}\">{sql}</selectKey>")
}

/// Inclusion guard for conditionally-emitted entries. The non-empty policy
/// only tightens text-shaped columns; all other shapes keep the null test.
#[must_use]
pub fn guard(property: &str, kind: ColumnKind, not_empty: bool) -> String {
    if not_empty && kind.is_text() {
        format!("{property} != null and {property} != ''")
    } else {
        format!("{property} != null")
    }
}

/// Complement of [`guard`]; the two partition every row, so a pair of
/// branches guarded by them activates exactly one per evaluation.
#[must_use]
pub fn null_guard(property: &str, kind: ColumnKind, not_empty: bool) -> String {
    if not_empty && kind.is_text() {
        format!("{property} == null or {property} == ''")
    } else {
        format!("{property} == null")
    }
}
