//! # Record Instances and Document Binding
//!
//! A `RecordInstance` is a schema-conforming bundle of [`crate::types::Datum`]
//! values, one per declared field, always fully populated (fresh instances
//! hold zero values). [`decode`] builds one from a document:
//!
//! ```text
//! document ──parse──> JsonValue ──bind──> RecordInstance
//! ```
//!
//! ## Binding Rules
//!
//! | Document situation | Outcome |
//! |--------------------|---------|
//! | key matches a field | value bound (kind-checked) |
//! | key matches nothing | silently ignored |
//! | field has no key | zero value retained |
//! | value is `null` | zero value retained |
//! | kind disagrees | `TypeMismatch` with the dotted field path |
//! | duplicate key | later entry wins |
//!
//! Unknown-key tolerance is deliberate: documents may grow new fields
//! without breaking older schemas.
//!
//! ## Module Structure
//!
//! - [`instance`]: `RecordInstance` with typed setters/getters
//! - [`decode`]: document-to-instance binding

pub mod decode;
pub mod instance;


pub use decode::decode;
pub use instance::RecordInstance;
