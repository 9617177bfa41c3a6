//! # Document Writer
//!
//! Renders a record instance as text. Field selection happens before any
//! bytes are written:
//!
//! 1. Hidden fields are dropped.
//! 2. `EmitPolicy::Never` fields are dropped.
//! 3. `EmitPolicy::OmitIfEmpty` fields are dropped when their value equals
//!    the kind's zero value (recursively for nested records).
//!
//! What survives is emitted under its external name, in declaration order.
//!
//! ## Layouts
//!
//! | Layout | Shape |
//! |--------|-------|
//! | `Compact` | `{"a":1,"b":{"c":2}}` |
//! | `Indented(unit)` | one member per line, `unit` repeated per level, `": "` after keys |
//!
//! Both layouts decode back to equal instances; the layout choice never
//! changes meaning. Records with no emitted fields render as `{}` in
//! either layout.
//!
//! ## Literals
//!
//! Strings are escaped per the interchange grammar (`\"`, `\\`, `\n`,
//! `\r`, `\t`, `\b`, `\f`, `\u00XX` for remaining control characters);
//! everything else is raw UTF-8. Integers use decimal notation; floats use
//! the shortest decimal form that round-trips. Non-finite floats have no
//! literal in the grammar and render as `null`, so the output stays
//! well-formed; such values do not round-trip.

use crate::records::RecordInstance;
use crate::schema::{EmitPolicy, FieldDef};
use crate::types::Datum;

/// Layout of the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pretty<'a> {
    /// No inserted whitespace.
    Compact,
    /// One member per line, each nesting level prefixed with one more
    /// repetition of the unit string.
    Indented(&'a str),
}

/// Encodes an instance as a textual document.
///
/// Pure and infallible: instances are kind-conforming by construction, so
/// there is nothing to reject.
pub fn encode(instance: &RecordInstance, pretty: Pretty<'_>) -> String {
    let mut out = String::new();
    write_record(instance, pretty, 0, &mut out);
    out
}

fn emitted_fields<'a>(
    instance: &'a RecordInstance,
) -> impl Iterator<Item = (&'a FieldDef, &'a Datum)> {
    instance
        .schema()
        .fields()
        .iter()
        .enumerate()
        .filter_map(|(idx, field)| instance.get(idx).map(|value| (field, value)))
        .filter(|(field, value)| {
            !field.is_hidden()
                && match field.policy() {
                    EmitPolicy::Always => true,
                    EmitPolicy::OmitIfEmpty => !value.is_empty(),
                    EmitPolicy::Never => false,
                }
        })
}

fn write_record(instance: &RecordInstance, pretty: Pretty<'_>, level: usize, out: &mut String) {
    let members: Vec<(&FieldDef, &Datum)> = emitted_fields(instance).collect();
    if members.is_empty() {
        out.push_str("{}");
        return;
    }

    match pretty {
        Pretty::Compact => {
            out.push('{');
            for (idx, (field, value)) in members.into_iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_string(field.external_name(), out);
                out.push(':');
                write_datum(value, pretty, level, out);
            }
            out.push('}');
        }
        Pretty::Indented(unit) => {
            out.push_str("{\n");
            let last = members.len() - 1;
            for (idx, (field, value)) in members.into_iter().enumerate() {
                push_indent(unit, level + 1, out);
                write_string(field.external_name(), out);
                out.push_str(": ");
                write_datum(value, pretty, level + 1, out);
                if idx < last {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(unit, level, out);
            out.push('}');
        }
    }
}

fn write_datum(value: &Datum, pretty: Pretty<'_>, level: usize, out: &mut String) {
    match value {
        Datum::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Datum::Int(n) => out.push_str(&n.to_string()),
        Datum::Float(f) => {
            if f.is_finite() {
                out.push_str(&f.to_string());
            } else {
                out.push_str("null");
            }
        }
        Datum::Text(s) => write_string(s, out),
        Datum::Record(rec) => write_record(rec, pretty, level, out),
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_indent(unit: &str, level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str(unit);
    }
}
