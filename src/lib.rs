//! # recson - Schema-Driven Record Codec
//!
//! recson converts between in-memory typed records and JSON text, driven by
//! explicit field-descriptor tables built at schema-declaration time. No
//! runtime reflection, no derive macros: every record shape is an ordered
//! table of field descriptors (external name, emit policy, kind), and the
//! codec walks that table in both directions.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use recson::{decode, encode, FieldDef, FieldKind, Pretty, RecordSchema};
//!
//! let schema = Arc::new(RecordSchema::new(
//!     "greeting",
//!     vec![
//!         FieldDef::new("message", FieldKind::Text),
//!         FieldDef::new("other_message", FieldKind::Text).rename("otherMessage"),
//!     ],
//! )?);
//!
//! let rec = decode(r#"{"message": "hi", "otherMessage": "bye"}"#, &schema)?;
//! let text = encode(&rec, Pretty::Indented("  "));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │   Public API (decode / encode / validate)   │
//! ├──────────────────────┬──────────────────────┤
//! │  Schema Layer        │  Record Layer        │
//! │  (FieldDef tables)   │  (RecordInstance)    │
//! ├──────────────────────┴──────────────────────┤
//! │        Value Layer (FieldKind, Datum)       │
//! ├─────────────────────────────────────────────┤
//! │   JSON Layer (tokenizer, parser, writer)    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Directionality
//!
//! | Operation | Input | Output | Failure |
//! |-----------|-------|--------|---------|
//! | [`decode`] | document + schema | `RecordInstance` | [`DecodeError`] |
//! | [`is_well_formed`] | document | `bool` | never |
//! | [`encode`] | instance + layout | `String` | never |
//!
//! Decoding is tolerant of unknown keys (skipped) and absent fields (zero
//! values) so documents can grow without breaking older schemas. Encoding
//! is deterministic: declaration order, stable omission rules, byte-stable
//! output for a given [`Pretty`] choice.
//!
//! ## Concurrency
//!
//! All operations are pure functions over their arguments. Schemas are
//! immutable after construction and shared through `Arc`, so any number of
//! threads may decode and encode against the same schema without locking.
//!
//! ## Module Overview
//!
//! - [`parsing`]: JSON tokenizer, parser, and well-formedness scanner
//! - [`schema`]: field descriptors and record schemas
//! - [`records`]: record instances and document-to-record binding
//! - [`encoding`]: record-to-document emission
//! - [`types`]: field kinds and owned runtime values
//! - [`config`]: shared limits
//! - [`error`]: the two-kind decode failure surface

pub mod config;
pub mod encoding;
pub mod error;
pub mod parsing;
pub mod records;
pub mod schema;
pub mod types;

pub use encoding::{encode, Pretty};
pub use error::DecodeError;
pub use parsing::is_well_formed;
pub use records::{decode, RecordInstance};
pub use schema::{EmitPolicy, FieldDef, RecordSchema};
pub use types::{Datum, FieldKind};
