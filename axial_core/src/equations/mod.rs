//! # Structural Equations
//!
//! Every formula the axial check applies lives here, in one place, so it can
//! be verified against the code references.
//!
//! ## Modules
//!
//! - [`concrete`] - Concrete axial compression formulas (Pu, Pn, φPn, DCR)
//! - [`registry`] - Equation metadata, usage tracking and EQUATIONS.md generation
//!
//! ## References
//!
//! - ACI 318-19: Building Code Requirements for Structural Concrete
//! - ASCE 7-22: Minimum Design Loads for Buildings

pub mod concrete;
pub mod registry;

pub use concrete::{
    demand_capacity_ratio,
    design_axial_capacity,
    factored_axial_load,
    nominal_axial_capacity,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    column_calculation_equations,
    generate_equations_markdown,
};
