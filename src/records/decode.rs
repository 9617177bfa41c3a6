//! # Document-to-Record Binding
//!
//! [`decode`] is the read direction of the codec: parse the whole document
//! first (all syntax errors surface before any binding work), then walk
//! the object entries against the schema's descriptor table.
//!
//! Binding is tolerant where the contract says so (unknown keys, absent
//! fields, `null` values) and strict everywhere else: a grammatical value
//! of the wrong kind fails with the dotted path of the offending field and
//! both kind names.

use crate::error::DecodeError;
use crate::parsing::json::{parse_document, JsonValue, Number};
use crate::records::RecordInstance;
use crate::schema::RecordSchema;
use crate::types::{Datum, FieldKind};
use std::sync::Arc;

/// Decodes a textual document into an instance of `schema`.
///
/// Pure function of its inputs. The document must be a single object
/// (after surrounding whitespace); each entry binds by external name under
/// the rules in the module docs.
pub fn decode(document: &str, schema: &Arc<RecordSchema>) -> Result<RecordInstance, DecodeError> {
    let value = parse_document(document)?;
    match value {
        JsonValue::Object(entries) => bind_object(entries, schema, schema.name()),
        other => Err(DecodeError::type_mismatch(
            schema.name(),
            "record",
            other.kind_name(),
        )),
    }
}

fn bind_object(
    entries: Vec<(String, JsonValue)>,
    schema: &Arc<RecordSchema>,
    path: &str,
) -> Result<RecordInstance, DecodeError> {
    let mut rec = RecordInstance::new(schema);

    for (key, value) in entries {
        // Unknown keys are skipped for forward compatibility.
        let Some(idx) = schema.resolve_key(&key) else {
            continue;
        };
        let Some(field) = schema.field(idx) else {
            continue;
        };
        let field_path = format!("{path}.{}", field.ident());
        if let Some(datum) = bind_value(value, field.kind(), &field_path)? {
            rec.values[idx] = datum;
        }
    }

    Ok(rec)
}

/// Binds one document value to a declared kind.
///
/// `Ok(None)` means "leave the zero value in place" (the `null` case).
fn bind_value(
    value: JsonValue,
    kind: &FieldKind,
    path: &str,
) -> Result<Option<Datum>, DecodeError> {
    match (kind, value) {
        (_, JsonValue::Null) => Ok(None),
        (FieldKind::Bool, JsonValue::Bool(b)) => Ok(Some(Datum::Bool(b))),
        (FieldKind::Int, JsonValue::Number(Number::Int(n))) => Ok(Some(Datum::Int(n))),
        (FieldKind::Float, JsonValue::Number(n)) => Ok(Some(Datum::Float(n.as_f64()))),
        (FieldKind::Text, JsonValue::String(s)) => Ok(Some(Datum::Text(s))),
        (FieldKind::Record(schema), JsonValue::Object(entries)) => {
            Ok(Some(Datum::Record(bind_object(entries, schema, path)?)))
        }
        (kind, value) => Err(DecodeError::type_mismatch(
            path,
            kind.name(),
            value.kind_name(),
        )),
    }
}
