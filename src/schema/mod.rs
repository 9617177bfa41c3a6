//! # Schema Definition
//!
//! A record schema is an ordered table of field descriptors. The table is
//! built once, validated at construction (external names must be unique),
//! and never mutated, so it can be shared freely across threads behind an
//! `Arc`.
//!
//! ## Descriptor Anatomy
//!
//! | Piece | Governs |
//! |-------|---------|
//! | internal identifier | programmatic access, dotted error paths, visibility |
//! | external name | the key used in documents (explicit or derived) |
//! | kind | what values the field may hold |
//! | emit policy | whether/when encoding writes the field |
//!
//! ## Module Structure
//!
//! - [`field`]: `FieldDef` and `EmitPolicy`
//! - [`record`]: `RecordSchema` with its external-name index

pub mod field;
pub mod record;

pub use field::{EmitPolicy, FieldDef};
pub use record::RecordSchema;
