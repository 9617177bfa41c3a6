//! # JSON Parsing and Validation
//!
//! Two entry points into the same grammar:
//!
//! 1. **Parsing**: [`json::parse_document`] turns a document into a
//!    [`json::JsonValue`] tree for the record binder.
//! 2. **Validation**: [`validate::is_well_formed`] answers the cheaper
//!    question "would parsing succeed syntactically?" without building the
//!    tree.
//!
//! ```text
//! ┌─────────────┐    ┌──────────────┐    ┌───────────────┐
//! │  Document   │───>│ JsonTokenizer│───>│ JsonValue     │
//! └─────────────┘    └──────┬───────┘    └───────────────┘
//!                           │
//!                           │            ┌───────────────┐
//!                           └───────────>│ is_well_formed│
//!                                        └───────────────┘
//! ```
//!
//! Both paths share the tokenizer and the limits in [`crate::config`], so
//! the validator returns `false` for exactly the inputs the parser rejects.
//!
//! ## Grammar
//!
//! Strict interchange-format rules: balanced `{}`/`[]` groupings, `,` and
//! `:` placement, RFC 8259 number literals (no leading zeros, mandatory
//! digits around `.` and after `e`), strings with validated escapes and no
//! raw control characters, exactly one value per document. Every rejection
//! carries the byte offset where the scan stopped.

pub mod json;
pub mod validate;

pub use json::{parse_document, JsonValue, Number};
pub use validate::is_well_formed;
