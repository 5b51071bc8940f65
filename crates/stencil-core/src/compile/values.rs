use crate::{
    classify::{KeyStrategy, classify},
    compile::prelude::{cache_name, gen_name},
    fragment,
    model::{EntityModel, InsertConfig},
};

///
/// Mode
///
/// Which insert variant the value list serves. Full mode pairs with the
/// unconditional column list; selective mode pairs with the guarded one.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Mode {
    Full,
    Selective,
}

/// Placeholder list, one entry per column-list entry, same stable order.
pub(crate) fn emit(out: &mut String, model: &EntityModel, config: &InsertConfig, mode: Mode) {
    out.push_str(fragment::TRIM_VALUES_OPEN);

    for (index, column) in model.columns.iter().enumerate() {
        if !column.insertable {
            continue;
        }

        match classify(model, index) {
            KeyStrategy::LogicDelete => {
                // Fixed "active" literal; a caller can never insert a row
                // pre-deleted.
                if let Some(flag) = model.logic_delete.as_ref() {
                    out.push_str(&flag.active_value);
                    out.push(',');
                }
            }
            KeyStrategy::AutoGenerated => {
                if config.insert_with_id {
                    emit_generated_key(out, &column.property);
                }
            }
            KeyStrategy::ExternallyGenerated => {
                // Always the bind output from the prelude, never the raw
                // property.
                let body = format!("{},", fragment::holder(&gen_name(&column.property)));
                match mode {
                    Mode::Full => out.push_str(&body),
                    Mode::Selective => {
                        let test =
                            fragment::guard(&column.property, column.kind, config.not_empty);
                        out.push_str(&fragment::if_test(&test, &body));
                    }
                }
            }
            KeyStrategy::Plain => {
                let test = fragment::guard(&column.property, column.kind, config.not_empty);
                let body = format!("{},", fragment::holder(&column.property));
                out.push_str(&fragment::if_test(&test, &body));

                if mode == Mode::Full {
                    // Complement branch: an explicit typed null, so the
                    // full column list always has a matching placeholder.
                    let null_test =
                        fragment::null_guard(&column.property, column.kind, config.not_empty);
                    let null_body = format!("{},", fragment::typed_null(&column.property));
                    out.push_str(&fragment::if_test(&null_test, &null_body));
                }
            }
        }
    }

    out.push_str(fragment::TRIM_CLOSE);
}

/// Two-branch conditional for the generated key. Branch order matters: the
/// cached value was taken before generation ran, so an explicit caller key
/// always overrides auto-generation.
fn emit_generated_key(out: &mut String, property: &str) {
    let cache = cache_name(property);

    out.push_str(&fragment::if_test(
        &format!("{cache} != null"),
        &format!("{},", fragment::holder(&cache)),
    ));
    out.push_str(&fragment::if_test(
        &format!("{cache} == null"),
        &format!("{},", fragment::holder(property)),
    ));
}
