//! # recson Configuration Module
//!
//! This module centralizes the crate's limit constants. The parser and the
//! well-formedness scanner must agree on every limit, otherwise a document
//! could validate and then fail to parse; co-locating the values makes the
//! coupling explicit.
//!
//! ## Module Organization
//!
//! - [`constants`]: All limit values with dependency documentation

pub mod constants;
pub use constants::*;
