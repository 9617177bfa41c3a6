//! # Record Schemas
//!
//! `RecordSchema` owns the ordered descriptor table plus a pre-computed
//! external-name index for O(1) exact key lookup during decoding.
//!
//! ## Schema Internals
//!
//! - `fields`: ordered descriptor table; declaration order is encoding
//!   order
//! - `by_external`: external name -> field index, visible fields only
//!
//! Construction fails if two visible fields share an external name; that
//! uniqueness is what makes key binding unambiguous.

use crate::schema::FieldDef;
use eyre::{bail, Result};
use hashbrown::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    name: String,
    pub(crate) fields: Vec<FieldDef>,
    by_external: HashMap<String, usize>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Result<Self> {
        let name = name.into();
        let mut by_external = HashMap::with_capacity(fields.len());

        for (idx, field) in fields.iter().enumerate() {
            if field.is_hidden() {
                continue;
            }
            if by_external
                .insert(field.external_name().to_string(), idx)
                .is_some()
            {
                bail!(
                    "duplicate external name {:?} in record type {:?}",
                    field.external_name(),
                    name
                );
            }
        }

        Ok(Self {
            name,
            fields,
            by_external,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, idx: usize) -> Option<&FieldDef> {
        self.fields.get(idx)
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Index of a field by internal identifier.
    pub fn field_index(&self, ident: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.ident() == ident)
    }

    /// Resolves a document key to a field index.
    ///
    /// Exact external-name match first; otherwise the first declared
    /// visible field whose external name matches ASCII
    /// case-insensitively. Hidden fields never match.
    pub fn resolve_key(&self, key: &str) -> Option<usize> {
        if let Some(&idx) = self.by_external.get(key) {
            return Some(idx);
        }
        self.fields.iter().position(|field| {
            !field.is_hidden() && field.external_name().eq_ignore_ascii_case(key)
        })
    }
}
