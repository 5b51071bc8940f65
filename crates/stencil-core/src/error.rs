use thiserror::Error as ThisError;

///
/// TemplateError
///
/// The single failure surface of template construction. Raised while the
/// prelude directives are being emitted, once per misconfigured entity,
/// and never retried: it signals static metadata misconfiguration, not a
/// transient condition. No partial template is ever returned alongside it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TemplateError {
    #[error(
        "entity {entity} maps more than one auto-generated key column \
         (statement {statement_id}); at most one is allowed"
    )]
    MultipleAutoKeys {
        /// Owning entity name.
        entity: String,
        /// Identity of the statement being built when the second key was
        /// discovered.
        statement_id: String,
    },
}
