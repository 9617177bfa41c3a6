//! # RecordInstance - Schema-Conforming Values
//!
//! A value of a record type: the shared schema plus one datum per declared
//! field. Instances start at all-zero values and stay kind-conforming
//! through the typed setters.
//!
//! ## Usage
//!
//! ```ignore
//! let mut rec = RecordInstance::new(&schema);
//! rec.set_text("title", "Greatest of all Books")?;
//! rec.set_int("year_published", 1776)?;
//! let year = rec.field("year_published").and_then(Datum::as_int);
//! ```
//!
//! Setters address fields by internal identifier and fail on unknown
//! identifiers or kind mismatches; the instance can therefore never hold a
//! value its schema does not declare.

use crate::schema::RecordSchema;
use crate::types::Datum;
use eyre::{bail, Result};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RecordInstance {
    schema: Arc<RecordSchema>,
    pub(crate) values: Vec<Datum>,
}

impl RecordInstance {
    /// Fresh instance with every field at its zero value.
    pub fn new(schema: &Arc<RecordSchema>) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|field| Datum::zero_of(field.kind()))
            .collect();
        Self {
            schema: Arc::clone(schema),
            values,
        }
    }

    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    pub fn get(&self, idx: usize) -> Option<&Datum> {
        self.values.get(idx)
    }

    /// Value of a field by internal identifier.
    pub fn field(&self, ident: &str) -> Option<&Datum> {
        self.schema
            .field_index(ident)
            .and_then(|idx| self.values.get(idx))
    }

    /// Replaces a field value after checking it conforms to the declared
    /// kind.
    pub fn set(&mut self, idx: usize, value: Datum) -> Result<()> {
        let Some(field) = self.schema.field(idx) else {
            bail!(
                "field index {} out of range for record type {:?}",
                idx,
                self.schema.name()
            );
        };
        if !value.matches(field.kind()) {
            bail!(
                "kind mismatch for field {:?}: declared {}, got {}",
                field.ident(),
                field.kind().name(),
                value.kind_name()
            );
        }
        self.values[idx] = value;
        Ok(())
    }

    pub fn set_bool(&mut self, ident: &str, value: bool) -> Result<()> {
        let idx = self.index_of(ident)?;
        self.set(idx, Datum::Bool(value))
    }

    pub fn set_int(&mut self, ident: &str, value: i64) -> Result<()> {
        let idx = self.index_of(ident)?;
        self.set(idx, Datum::Int(value))
    }

    pub fn set_float(&mut self, ident: &str, value: f64) -> Result<()> {
        let idx = self.index_of(ident)?;
        self.set(idx, Datum::Float(value))
    }

    pub fn set_text(&mut self, ident: &str, value: impl Into<String>) -> Result<()> {
        let idx = self.index_of(ident)?;
        self.set(idx, Datum::Text(value.into()))
    }

    pub fn set_record(&mut self, ident: &str, value: RecordInstance) -> Result<()> {
        let idx = self.index_of(ident)?;
        self.set(idx, Datum::Record(value))
    }

    /// Whether every visible field holds its zero value, recursively.
    ///
    /// This is the nested-record emptiness notion used by
    /// [`crate::EmitPolicy::OmitIfEmpty`].
    pub fn is_empty(&self) -> bool {
        self.schema
            .fields()
            .iter()
            .zip(&self.values)
            .filter(|(field, _)| !field.is_hidden())
            .all(|(_, value)| value.is_empty())
    }

    fn index_of(&self, ident: &str) -> Result<usize> {
        match self.schema.field_index(ident) {
            Some(idx) => Ok(idx),
            None => bail!(
                "record type {:?} has no field {:?}",
                self.schema.name(),
                ident
            ),
        }
    }
}

/// Instances compare by schema and field values; the schema comparison is
/// cheap for the common shared-`Arc` case.
impl PartialEq for RecordInstance {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.schema, &other.schema) || self.schema == other.schema)
            && self.values == other.values
    }
}
