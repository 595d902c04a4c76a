//! # axial_core - Concrete Axial Check Engine
//!
//! `axial_core` checks a short concrete column under concentric axial load:
//! it validates five inputs, computes the factored demand and the design
//! capacity, classifies the demand/capacity ratio as PASS or FAIL, and signs
//! the result with a deterministic content fingerprint.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Deterministic**: Identical inputs give bit-identical results and signatures
//!
//! ## Quick Start
//!
//! ```rust
//! use axial_core::{evaluate, signature, validate, ColumnInput, ResultPayload};
//!
//! let errors = validate(1000.0, 300_000.0, 28.0, 0.65, 1.4);
//! assert!(errors.is_empty());
//!
//! let result = evaluate(1000.0, 300_000.0, 28.0, 0.65, 1.4);
//! assert_eq!(result.pu_kn, 1400.0);
//!
//! let payload = ResultPayload::from_evaluation(&ColumnInput::default(), &result);
//! assert_eq!(signature(&payload).unwrap().len(), 20);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Validator and engine for the column check
//! - [`equations`] - Formulas and the equation registry
//! - [`signature`] - Canonical payload serialization and hashing
//! - [`report`] - Full evaluation report for front ends
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod report;
pub mod signature;

// Re-export commonly used types at crate root for convenience
pub use calculations::column::{calculate, evaluate, validate, CheckStatus, ColumnInput, ColumnResult};
pub use errors::{CalcError, CalcResult};
pub use report::ValidationReport;
pub use signature::{signature, PayloadValue, ResultPayload};
