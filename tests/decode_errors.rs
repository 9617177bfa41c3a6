//! Failure-path coverage: the syntax corpus shared between the validator
//! and the decoder, type-mismatch payloads, and the nesting guard.

use recson::{decode, is_well_formed, DecodeError, FieldDef, FieldKind, RecordSchema};
use std::sync::Arc;

fn flat_schema() -> Arc<RecordSchema> {
    Arc::new(
        RecordSchema::new(
            "sample",
            vec![
                FieldDef::new("name", FieldKind::Text).rename("name"),
                FieldDef::new("count", FieldKind::Int).rename("count"),
                FieldDef::new("ratio", FieldKind::Float).rename("ratio"),
                FieldDef::new("active", FieldKind::Bool).rename("active"),
            ],
        )
        .unwrap(),
    )
}

#[test]
fn malformed_documents_fail_both_surfaces() {
    let schema = flat_schema();
    let corpus = [
        r#"{"name": "unterminated"#,
        r#"{name": "missing open quote"}"#,
        r#"{"name" "missing colon"}"#,
        r#"{"name": "a",}"#,
        r#"{"count": 007}"#,
        r#"{"count": 1.}"#,
        r#"{"count": +1}"#,
        "{\"name\": \"raw\ncontrol\"}",
        r#"{"name": "bad \q escape"}"#,
        r#"{"name": "x"} trailing"#,
        "",
        "[",
    ];

    for doc in corpus {
        assert!(!is_well_formed(doc), "validator should reject {doc:?}");
        let err = decode(doc, &schema).unwrap_err();
        assert!(err.is_syntax(), "decoder should reject {doc:?} as syntax");
        assert!(err.offset().is_some());
    }
}

#[test]
fn syntax_error_offset_points_at_the_violation() {
    let schema = flat_schema();
    let err = decode(r#"{"name": "x"}!"#, &schema).unwrap_err();
    assert_eq!(
        err,
        DecodeError::syntax(13, "trailing characters after document")
    );
}

#[test]
fn mismatch_carries_field_path_and_both_kinds() {
    let schema = flat_schema();
    let cases = [
        (r#"{"count": "12"}"#, "sample.count", "integer", "string"),
        (r#"{"count": 1.5}"#, "sample.count", "integer", "number"),
        (r#"{"count": [1]}"#, "sample.count", "integer", "array"),
        (r#"{"active": 1}"#, "sample.active", "bool", "number"),
        (r#"{"ratio": "high"}"#, "sample.ratio", "float", "string"),
        (r#"{"name": {}}"#, "sample.name", "text", "object"),
    ];

    for (doc, field, expected, actual) in cases {
        assert!(is_well_formed(doc), "corpus document {doc:?} must be well-formed");
        assert_eq!(
            decode(doc, &schema).unwrap_err(),
            DecodeError::type_mismatch(field, expected, actual),
            "mismatch payload for {doc:?}"
        );
    }
}

#[test]
fn top_level_mismatch_names_the_record_type() {
    let schema = flat_schema();
    for (doc, actual) in [("[]", "array"), ("42", "number"), ("null", "null")] {
        assert!(is_well_formed(doc));
        assert_eq!(
            decode(doc, &schema).unwrap_err(),
            DecodeError::type_mismatch("sample", "record", actual)
        );
    }
}

#[test]
fn nesting_guard_rejects_hostile_depth() {
    let schema = flat_schema();
    let depth = 4096;
    let mut doc = String::from(r#"{"name": "#);
    for _ in 0..depth {
        doc.push('[');
    }
    for _ in 0..depth {
        doc.push(']');
    }
    doc.push('}');

    assert!(!is_well_formed(&doc));
    let err = decode(&doc, &schema).unwrap_err();
    assert!(err.is_syntax());
    assert!(err.to_string().contains("nesting exceeds"));
}

#[test]
fn mismatch_inside_unknown_key_is_not_reported() {
    // Unknown keys are skipped wholesale; their values only need to be
    // grammatical.
    let schema = flat_schema();
    let rec = decode(r#"{"unknown": [1, {"x": false}], "count": 3}"#, &schema).unwrap();
    assert_eq!(rec.field("count").and_then(|d| d.as_int()), Some(3));
}

#[test]
fn integer_literal_wider_than_i64_is_a_mismatch_for_int_fields() {
    let schema = flat_schema();
    let err = decode(r#"{"count": 18446744073709551616}"#, &schema).unwrap_err();
    assert_eq!(
        err,
        DecodeError::type_mismatch("sample.count", "integer", "number")
    );

    // The same literal is fine for a float field.
    let rec = decode(r#"{"ratio": 18446744073709551616}"#, &schema).unwrap();
    assert_eq!(
        rec.field("ratio").and_then(|d| d.as_float()),
        Some(18446744073709551616.0)
    );
}
