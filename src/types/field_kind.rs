//! # Declared Field Kinds
//!
//! `FieldKind` is the single source of truth for what a field may hold.
//! Scalar kinds carry no payload; the record kind carries the nested
//! schema, so the kind graph mirrors the (acyclic, statically declared)
//! record type graph.

use crate::schema::RecordSchema;
use std::sync::Arc;

/// Declared kind of a record field.
///
/// Nested record kinds share their schema through `Arc`: schemas are
/// immutable after construction, so the same nested shape can appear in
/// any number of parent schemas and threads without copying.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    Text,
    Record(Arc<RecordSchema>),
}

impl FieldKind {
    /// Kind label used in type-mismatch diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int => "integer",
            FieldKind::Float => "float",
            FieldKind::Text => "text",
            FieldKind::Record(_) => "record",
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, FieldKind::Record(_))
    }

    /// The nested schema for record kinds.
    pub fn record_schema(&self) -> Option<&Arc<RecordSchema>> {
        match self {
            FieldKind::Record(schema) => Some(schema),
            _ => None,
        }
    }
}
