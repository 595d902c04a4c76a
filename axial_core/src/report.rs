//! # Validation Report
//!
//! Everything a front end needs to show for one evaluation: inputs, unrounded
//! results, the signature, the formulas applied, the model assumptions and the
//! disclaimer. The report holds no timestamp; when it was produced is the
//! caller's business and never part of the signature.
//!
//! ```rust
//! use axial_core::calculations::ColumnInput;
//! use axial_core::report::ValidationReport;
//!
//! let report = ValidationReport::run(&ColumnInput::default()).unwrap();
//! assert!(report.result.passes());
//! assert_eq!(report.signature.len(), 20);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::column::{calculate, ColumnInput, ColumnResult};
use crate::equations::registry::{column_calculation_equations, Equation, EquationTracker};
use crate::errors::CalcResult;
use crate::signature::ResultPayload;

pub const MODEL_ASSUMPTIONS: &[&str] = &[
    "Short column behavior assumed",
    "Concentric axial loading only",
    "No slenderness effects included",
    "No reinforcement contribution included",
    "Strength reduction format (φ-based design)",
];

pub const DISCLAIMER: &str = "This module represents a simplified axial validation core and is not a \
     substitute for full structural design verification.";

/// Decimal places shown for forces (kN)
pub const FORCE_DECIMALS: u32 = 3;

/// Decimal places shown for the demand/capacity ratio
pub const RATIO_DECIMALS: u32 = 4;

/// Outcome of one complete evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub input: ColumnInput,
    pub result: ColumnResult,
    /// Fingerprint of the unrounded payload
    pub signature: String,
    /// Plain-text formulas, in evaluation order
    pub formulas: Vec<String>,
    pub assumptions: Vec<String>,
    pub disclaimer: String,
}

impl ValidationReport {
    /// Validate, evaluate and sign.
    ///
    /// Fails with `CalcError::ValidationFailed` carrying every message when
    /// any input rule is violated.
    pub fn run(input: &ColumnInput) -> CalcResult<Self> {
        let result = calculate(input)?;
        let signature = ResultPayload::from_evaluation(input, &result).signature()?;

        let mut tracker = EquationTracker::new();
        for equation in column_calculation_equations() {
            tracker.record(equation, section_for(equation));
        }

        Ok(ValidationReport {
            input: *input,
            result,
            signature,
            formulas: tracker.formula_reference(),
            assumptions: MODEL_ASSUMPTIONS.iter().map(|s| s.to_string()).collect(),
            disclaimer: DISCLAIMER.to_string(),
        })
    }

    /// Pu rounded for display
    pub fn display_pu(&self) -> f64 {
        round_to(self.result.pu_kn, FORCE_DECIMALS)
    }

    /// Pn rounded for display
    pub fn display_pn(&self) -> f64 {
        round_to(self.result.pn_kn, FORCE_DECIMALS)
    }

    /// φPn rounded for display
    pub fn display_phi_pn(&self) -> f64 {
        round_to(self.result.phi_pn_kn, FORCE_DECIMALS)
    }

    /// DCR rounded for display
    pub fn display_dc_ratio(&self) -> f64 {
        round_to(self.result.dc_ratio, RATIO_DECIMALS)
    }
}

fn section_for(equation: Equation) -> &'static str {
    match equation {
        Equation::FactoredAxialLoad => "Demand side",
        Equation::NominalAxialCapacity | Equation::DesignAxialCapacity => "Resistance side",
        Equation::DemandCapacityRatio => "Verification",
    }
}

/// Round half away from zero to `places` decimals. Display only.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
