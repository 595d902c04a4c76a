//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`column`] - Concrete column under concentric axial load

pub mod column;

pub use column::{calculate, evaluate, validate, CheckStatus, ColumnInput, ColumnResult};
