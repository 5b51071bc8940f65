use crate::{
    classify::{KeyStrategy, classify},
    fragment,
    model::{EntityModel, InsertConfig},
};

/// Full-mode column list: every insertable column, unconditionally.
///
/// Identity columns are emitted only when the caller may supply their
/// value; with `insert_with_id` off they contribute nothing here, matching
/// the absent placeholder on the value side.
pub(crate) fn emit_full(out: &mut String, model: &EntityModel, config: &InsertConfig) {
    out.push_str(fragment::TRIM_COLUMNS_OPEN);

    for (index, column) in model.columns.iter().enumerate() {
        if !column.insertable {
            continue;
        }
        if classify(model, index) == KeyStrategy::AutoGenerated && !config.insert_with_id {
            continue;
        }

        out.push_str(&column.column);
        out.push(',');
    }

    out.push_str(fragment::TRIM_CLOSE);
}

/// Selective-mode column list: names wrapped in per-row inclusion guards.
///
/// Guard text is produced by `fragment::guard` from the same inputs the
/// value compiler uses, which is what keeps the two fragments positionally
/// aligned at row-evaluation time.
pub(crate) fn emit_selective(out: &mut String, model: &EntityModel, config: &InsertConfig) {
    out.push_str(fragment::TRIM_COLUMNS_OPEN);

    for (index, column) in model.columns.iter().enumerate() {
        if !column.insertable {
            continue;
        }

        match classify(model, index) {
            KeyStrategy::AutoGenerated => {
                // Unconditional: once the prelude has run the key value is
                // always meaningful, cached or generated.
                if config.insert_with_id {
                    out.push_str(&column.column);
                    out.push(',');
                }
            }
            KeyStrategy::LogicDelete => {
                // Insert must always set a definite "active" state.
                out.push_str(&column.column);
                out.push(',');
            }
            KeyStrategy::ExternallyGenerated | KeyStrategy::Plain => {
                let test = fragment::guard(&column.property, column.kind, config.not_empty);
                out.push_str(&fragment::if_test(&test, &format!("{},", column.column)));
            }
        }
    }

    out.push_str(fragment::TRIM_CLOSE);
}
