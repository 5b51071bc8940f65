use crate::{
    classify::{KeyStrategy, classify},
    error::TemplateError,
    fragment,
    model::{ColumnDescriptor, DRIVER_REPORTED, EntityModel, InsertConfig},
};

/// Emit the pre-body directives into `out`, enforcing the one-key rule.
///
/// Runs once per statement, before either list compiler. For every
/// auto-generated column the caller-supplied value is cached first, then
/// the first such column is registered as *the* generated key; a later one
/// is tolerated only when it carries the driver-reported marker. The cache
/// bind for a rejected column has already been written by the time the
/// error is raised, which is harmless: the error aborts the whole build
/// and no template is surfaced.
pub(crate) fn emit(
    out: &mut String,
    model: &EntityModel,
    config: &InsertConfig,
    statement_id: &str,
) -> Result<(), TemplateError> {
    // Fold state: has the generated key been registered yet.
    let mut has_generated_key = false;

    for (index, column) in model.columns.iter().enumerate() {
        match classify(model, index) {
            KeyStrategy::AutoGenerated => {
                // Cache the caller-supplied value before generation can
                // overwrite it. Emitted even when insert_with_id is off.
                out.push_str(&fragment::bind(
                    &cache_name(&column.property),
                    &column.property,
                ));

                if has_generated_key {
                    if column.is_driver_reported() {
                        // Same driver feature observed again, not a second key.
                        continue;
                    }
                    return Err(TemplateError::MultipleAutoKeys {
                        entity: model.entity.clone(),
                        statement_id: statement_id.to_string(),
                    });
                }

                out.push_str(&fragment::select_key(
                    &column.property,
                    config.key_retrieval,
                    retrieval_sql(column, config),
                ));
                has_generated_key = true;
            }
            KeyStrategy::ExternallyGenerated => {
                if let Some(gen_id) = column.gen_id.as_deref() {
                    out.push_str(&fragment::bind(
                        &gen_name(&column.property),
                        &gen_call(gen_id, column, &model.table),
                    ));
                }
            }
            KeyStrategy::LogicDelete | KeyStrategy::Plain => {}
        }
    }

    Ok(())
}

/// Bind alias holding the cached original key value.
pub(crate) fn cache_name(property: &str) -> String {
    format!("{property}{}", fragment::CACHE_SUFFIX)
}

/// Bind alias holding the externally generated value.
pub(crate) fn gen_name(property: &str) -> String {
    format!("{property}{}", fragment::GEN_SUFFIX)
}

/// External-generation call. Argument order is part of the engine contract:
/// parameter object, property name, generator class, table name, column name.
fn gen_call(gen_id: &str, column: &ColumnDescriptor, table: &str) -> String {
    format!(
        "{}(_parameter, '{}', '{gen_id}', '{table}', '{}')",
        fragment::GEN_ID_FN,
        column.property,
        column.column,
    )
}

/// Identity-retrieval statement for the generated key: the column's
/// generator override when it names one, else the configured default.
fn retrieval_sql<'a>(column: &'a ColumnDescriptor, config: &'a InsertConfig) -> &'a str {
    match column.generator.as_deref() {
        Some(sql) if sql != DRIVER_REPORTED => sql,
        _ => &config.identity_retrieval,
    }
}
