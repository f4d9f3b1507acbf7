//! core
//!
//! Domain types and the pure record-to-hierarchy transform.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RefName
//! - [`record`] - Branch records and the NUL-delimited line parser
//! - [`index`] - Reference index for upstream membership tests
//! - [`sanitize`] - Dangling-upstream normalization
//! - [`forest`] - Hierarchy construction and cycle rejection
//! - [`flatten`] - Depth-first flattening with indentation
//!
//! # Design Principles
//!
//! - Data flows strictly forward: parse → index → sanitize → build → flatten
//! - Every stage is a pure function over owned values
//! - Field contents are opaque text; only arity and upstream membership are
//!   interpreted

pub mod flatten;
pub mod forest;
pub mod index;
pub mod record;
pub mod sanitize;
pub mod types;
