//! # recson Limit Constants
//!
//! Limits shared across the parsing layer. Both entry points into the JSON
//! grammar read the same values:
//!
//! ```text
//! MAX_DOCUMENT_DEPTH (128)
//!       │
//!       ├─> parsing::json::parse_document (recursion guard)
//!       │     Rejects with a Syntax error once nesting exceeds the limit.
//!       │
//!       └─> parsing::validate::is_well_formed (scope stack guard)
//!             Returns false for the same inputs the parser rejects.
//! ```
//!
//! ## Critical Invariants
//!
//! 1. `is_well_formed(d) == false` for every `d` the parser rejects; the
//!    shared depth limit is load-bearing for that guarantee.
//! 2. `UNICODE_ESCAPE_LEN` matches the four hex digits of a `\uXXXX`
//!    escape and is used by both the scanner and the unescaper.

/// Maximum nesting depth (objects and arrays combined) a document may use.
///
/// Nesting is bounded by the document itself, so a hostile input could
/// otherwise drive the recursive parser arbitrarily deep. 128 levels is
/// far beyond any record schema this crate can express while keeping
/// stack usage trivially small.
pub const MAX_DOCUMENT_DEPTH: usize = 128;

/// Number of hex digits in a `\uXXXX` escape sequence.
pub const UNICODE_ESCAPE_LEN: usize = 4;
