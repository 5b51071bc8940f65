
use crate::{
    compile::{build_insert, build_insert_selective},
    error::TemplateError,
    fragment,
    model::{ColumnKind, InsertConfig, KeyRetrieval, LogicDeleteRef},
    test_fixtures::{column, entity, gen_id_column, identity_column, reference_entity},
};

const STMT: &str = "account.insert";

/// Inner text of the trim section opened by `open`.
fn section<'a>(template: &'a str, open: &str) -> &'a str {
    let start = template.find(open).expect("section open") + open.len();
    let end = template[start..].find(fragment::TRIM_CLOSE).expect("section close") + start;

    &template[start..end]
}

/// All `<if test="...">` guard expressions in a section, in order.
fn guard_tests(section: &str) -> Vec<String> {
    let mut tests = Vec::new();
    let mut rest = section;

    while let Some(pos) = rest.find("<if test=\"") {
        let after = &rest[pos + 10..];
        let end = after.find('"').expect("closing quote");
        tests.push(after[..end].to_string());
        rest = &after[end..];
    }

    tests
}

/// Guards that decide per-row inclusion. Filters out the generated-key
/// branch pair, which is a two-way branch over the cache alias rather than
/// an inclusion condition and has no column-list counterpart.
fn inclusion_guards(section: &str) -> Vec<String> {
    guard_tests(section)
        .into_iter()
        .filter(|test| !test.contains(fragment::CACHE_SUFFIX))
        .collect()
}

// ── Scenarios ─────────────────────────────────────────

#[test]
fn selective_without_insert_with_id_matches_reference_template() {
    let model = reference_entity();
    let config = InsertConfig::default();

    let template = build_insert_selective(&model, &config, STMT).unwrap();

    assert_eq!(
        template,
        concat!(
            "<bind name=\"id_cache\" value=\"id\"/>",
            "<selectKey keyProperty=\"id\" order=\"AFTER\">SELECT LAST_INSERT_ID()</selectKey>",
            "INSERT INTO tb_account ",
            "<trim prefix=\"(\" suffix=\")\" suffixOverrides=\",\">",
            "<if test=\"name != null\">name,</if>deleted,",
            "</trim>",
            "<trim prefix=\"VALUES(\" suffix=\")\" suffixOverrides=\",\">",
            "<if test=\"name != null\">#{name},</if>0,",
            "</trim>",
        )
    );
}

#[test]
fn full_with_insert_with_id_matches_reference_template() {
    let model = reference_entity();
    let config = InsertConfig {
        insert_with_id: true,
        ..InsertConfig::default()
    };

    let template = build_insert(&model, &config, STMT).unwrap();

    assert_eq!(
        template,
        concat!(
            "<bind name=\"id_cache\" value=\"id\"/>",
            "<selectKey keyProperty=\"id\" order=\"AFTER\">SELECT LAST_INSERT_ID()</selectKey>",
            "INSERT INTO tb_account ",
            "<trim prefix=\"(\" suffix=\")\" suffixOverrides=\",\">",
            "id,name,deleted,",
            "</trim>",
            "<trim prefix=\"VALUES(\" suffix=\")\" suffixOverrides=\",\">",
            "<if test=\"id_cache != null\">#{id_cache},</if>",
            "<if test=\"id_cache == null\">#{id},</if>",
            "<if test=\"name != null\">#{name},</if>",
            "<if test=\"name == null\">#{name,jdbcType=VARCHAR},</if>",
            "0,",
            "</trim>",
        )
    );
}

// ── Generated key ─────────────────────────────────────

#[test]
fn cached_key_value_branch_comes_first() {
    let model = reference_entity();
    let config = InsertConfig {
        insert_with_id: true,
        ..InsertConfig::default()
    };

    let template = build_insert(&model, &config, STMT).unwrap();
    let values = section(&template, fragment::TRIM_VALUES_OPEN);

    // Cached-value-wins: the branch reading the pre-generation cache must
    // precede the branch reading the (possibly generated) property.
    assert!(values.starts_with(
        "<if test=\"id_cache != null\">#{id_cache},</if><if test=\"id_cache == null\">#{id},</if>"
    ));
}

#[test]
fn identity_column_contributes_nothing_without_insert_with_id() {
    let model = reference_entity();
    let config = InsertConfig::default();

    let template = build_insert(&model, &config, STMT).unwrap();

    let columns = section(&template, fragment::TRIM_COLUMNS_OPEN);
    let values = section(&template, fragment::TRIM_VALUES_OPEN);
    assert_eq!(columns, "name,deleted,");
    assert!(!values.contains("#{id"));
}

#[test]
fn selective_includes_identity_column_unconditionally_with_insert_with_id() {
    let model = reference_entity();
    let config = InsertConfig {
        insert_with_id: true,
        ..InsertConfig::default()
    };

    let template = build_insert_selective(&model, &config, STMT).unwrap();
    let columns = section(&template, fragment::TRIM_COLUMNS_OPEN);

    assert!(columns.starts_with("id,"));
    assert!(!columns.contains("<if test=\"id"));
}

#[test]
fn second_auto_key_fails_both_operations() {
    let model = entity("order", vec![identity_column("id"), identity_column("seq")]);
    let config = InsertConfig::default();

    let expected = TemplateError::MultipleAutoKeys {
        entity: "order".to_string(),
        statement_id: STMT.to_string(),
    };
    assert_eq!(build_insert(&model, &config, STMT), Err(expected.clone()));
    assert_eq!(build_insert_selective(&model, &config, STMT), Err(expected));
}

#[test]
fn driver_reported_duplicate_is_a_repeat_observation_not_a_second_key() {
    let mut seq = identity_column("seq");
    seq.generator = Some(crate::model::DRIVER_REPORTED.to_string());
    let model = entity("order", vec![identity_column("id"), seq]);
    let config = InsertConfig::default();

    let template = build_insert(&model, &config, STMT).unwrap();

    // Both columns get cache binds; only the first registers key capture.
    assert!(template.contains("<bind name=\"id_cache\" value=\"id\"/>"));
    assert!(template.contains("<bind name=\"seq_cache\" value=\"seq\"/>"));
    assert_eq!(template.matches("<selectKey").count(), 1);
    assert!(template.contains("keyProperty=\"id\""));
}

#[test]
fn generator_override_and_before_policy_shape_key_capture() {
    let mut id = identity_column("id");
    id.generator = Some("SELECT order_seq.NEXTVAL FROM dual".to_string());
    let model = entity("order", vec![id, column("name", "name")]);
    let config = InsertConfig {
        key_retrieval: KeyRetrieval::BeforeStatement,
        ..InsertConfig::default()
    };

    let template = build_insert(&model, &config, STMT).unwrap();

    assert!(template.contains(
        "<selectKey keyProperty=\"id\" order=\"BEFORE\">SELECT order_seq.NEXTVAL FROM dual</selectKey>"
    ));
}

// ── External generation ───────────────────────────────

#[test]
fn gen_id_bind_carries_arguments_in_fixed_order() {
    let model = entity("account", vec![gen_id_column("code", "CodeGen")]);
    let config = InsertConfig::default();

    let template = build_insert(&model, &config, STMT).unwrap();

    assert!(template.contains(
        "<bind name=\"code_gen\" value=\"genId(_parameter, 'code', 'CodeGen', 'tb_account', 'code')\"/>"
    ));
}

#[test]
fn gen_id_value_traces_to_the_bind_never_the_raw_property() {
    let model = entity("account", vec![gen_id_column("code", "CodeGen")]);
    let config = InsertConfig::default();

    let full = build_insert(&model, &config, STMT).unwrap();
    let selective = build_insert_selective(&model, &config, STMT).unwrap();

    assert!(section(&full, fragment::TRIM_VALUES_OPEN).contains("#{code_gen}"));
    assert!(!full.contains("#{code}"));

    // Selective mode guards the bind placeholder with the same inclusion
    // test the column list uses.
    let values = section(&selective, fragment::TRIM_VALUES_OPEN);
    assert_eq!(values, "<if test=\"code != null\">#{code_gen},</if>");
    assert_eq!(
        section(&selective, fragment::TRIM_COLUMNS_OPEN),
        "<if test=\"code != null\">code,</if>"
    );
}

// ── Logic delete ──────────────────────────────────────

#[test]
fn logic_delete_stays_unconditional_when_every_other_column_is_guarded() {
    let mut model = entity(
        "session",
        vec![column("token", "token"), column("deleted", "deleted")],
    );
    model.logic_delete = Some(LogicDeleteRef {
        index: 1,
        active_value: "0".to_string(),
    });
    let config = InsertConfig::default();

    let template = build_insert_selective(&model, &config, STMT).unwrap();

    let columns = section(&template, fragment::TRIM_COLUMNS_OPEN);
    let values = section(&template, fragment::TRIM_VALUES_OPEN);
    assert!(columns.ends_with("deleted,"));
    assert!(!columns.contains("<if test=\"deleted"));
    assert!(values.ends_with("0,"));
    assert!(!values.contains("#{deleted}"));
}

// ── Policies and skips ────────────────────────────────

#[test]
fn not_empty_policy_tightens_text_guards_only() {
    let mut age = column("age", "age");
    age.kind = ColumnKind::Int;
    let model = entity("person", vec![column("name", "name"), age]);
    let config = InsertConfig {
        not_empty: true,
        ..InsertConfig::default()
    };

    let template = build_insert_selective(&model, &config, STMT).unwrap();
    let columns = section(&template, fragment::TRIM_COLUMNS_OPEN);

    assert_eq!(
        guard_tests(columns),
        vec!["name != null and name != ''", "age != null"]
    );
}

#[test]
fn non_insertable_column_is_skipped_on_both_sides() {
    let mut version = column("version", "version");
    version.insertable = false;
    let model = entity("doc", vec![column("title", "title"), version]);
    let config = InsertConfig::default();

    let template = build_insert(&model, &config, STMT).unwrap();

    assert!(!template.contains("version"));
}

// ── Laws ──────────────────────────────────────────────

#[test]
fn full_insert_is_idempotent() {
    let model = reference_entity();
    let config = InsertConfig {
        insert_with_id: true,
        ..InsertConfig::default()
    };

    assert_eq!(
        build_insert(&model, &config, STMT).unwrap(),
        build_insert(&model, &config, STMT).unwrap()
    );
}

#[test]
fn selective_guards_stay_positionally_aligned() {
    let mut model = entity(
        "mixed",
        vec![
            identity_column("id"),
            column("name", "name"),
            gen_id_column("code", "CodeGen"),
            column("deleted", "deleted"),
        ],
    );
    model.logic_delete = Some(LogicDeleteRef {
        index: 3,
        active_value: "0".to_string(),
    });
    let config = InsertConfig {
        insert_with_id: true,
        not_empty: true,
        ..InsertConfig::default()
    };

    let template = build_insert_selective(&model, &config, STMT).unwrap();

    let column_guards = inclusion_guards(section(&template, fragment::TRIM_COLUMNS_OPEN));
    let value_guards = inclusion_guards(section(&template, fragment::TRIM_VALUES_OPEN));
    assert_eq!(column_guards, value_guards);
    assert_eq!(column_guards.len(), 2);
}
