use derive_more::Display;
use serde::Serialize;

///
/// InsertConfig
///
/// Global insert policies shared by every template build. A config is
/// resolved once per deployment and reused across entities.
///

#[derive(Clone, Debug, Serialize)]
pub struct InsertConfig {
    /// Whether identity columns also accept a caller-supplied value. When
    /// off, identity columns contribute neither a column-list entry nor a
    /// placeholder; the generator alone supplies the value out-of-band.
    pub insert_with_id: bool,

    /// Treat empty text like null in conditional guards.
    pub not_empty: bool,

    /// When the generated key is fetched relative to statement execution.
    pub key_retrieval: KeyRetrieval,

    /// Default identity-retrieval statement for the target database, used
    /// when a column does not carry its own retrieval override.
    pub identity_retrieval: String,
}

impl Default for InsertConfig {
    /// MySQL-flavored defaults: keys fetched after execution via
    /// `LAST_INSERT_ID`, null-only guards, no caller-supplied ids.
    fn default() -> Self {
        Self {
            insert_with_id: false,
            not_empty: false,
            key_retrieval: KeyRetrieval::AfterStatement,
            identity_retrieval: "SELECT LAST_INSERT_ID()".to_string(),
        }
    }
}

///
/// KeyRetrieval
///
/// Ordering of generated-key capture relative to the statement body. The
/// display form is the literal the templating engine expects in the
/// capture directive's `order` attribute.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum KeyRetrieval {
    #[display("AFTER")]
    AfterStatement,
    #[display("BEFORE")]
    BeforeStatement,
}
