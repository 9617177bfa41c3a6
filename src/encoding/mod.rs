//! # Record-to-Document Emission
//!
//! The write direction of the codec. Emission walks the schema's
//! descriptor table in declaration order, applies each field's emit
//! policy, and renders values in the interchange grammar.
//!
//! Output is deterministic: the same instance and the same [`Pretty`]
//! choice always produce byte-identical text, which keeps diffs and
//! golden tests stable.

pub mod writer;

pub use writer::{encode, Pretty};
