use crate::{
    compile::{columns, prelude, values, values::Mode},
    error::TemplateError,
    fragment,
    model::{EntityModel, InsertConfig},
};

/// Build the full-insert template.
///
/// Prelude directives, the statement head, the complete unconditional
/// column list, then the full-mode value list. Pure: identical inputs
/// yield byte-identical templates.
pub fn build_insert(
    model: &EntityModel,
    config: &InsertConfig,
    statement_id: &str,
) -> Result<String, TemplateError> {
    let mut out = String::new();

    prelude::emit(&mut out, model, config, statement_id)?;
    out.push_str(&fragment::insert_into(&model.table));
    columns::emit_full(&mut out, model, config);
    values::emit(&mut out, model, config, Mode::Full);

    Ok(out)
}

/// Build the selective-insert template.
///
/// Prelude directives, the statement head, then the guarded column list
/// and the selective value list over the same column order.
pub fn build_insert_selective(
    model: &EntityModel,
    config: &InsertConfig,
    statement_id: &str,
) -> Result<String, TemplateError> {
    let mut out = String::new();

    prelude::emit(&mut out, model, config, statement_id)?;
    out.push_str(&fragment::insert_into(&model.table));
    columns::emit_selective(&mut out, model, config);
    values::emit(&mut out, model, config, Mode::Selective);

    Ok(out)
}
