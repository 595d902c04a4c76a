//! # Concrete Column Axial Check
//!
//! Demand/capacity check of a short concrete column under concentric axial load.
//!
//! ## Assumptions
//!
//! - Short column behavior (no slenderness effects)
//! - Concentric axial loading only
//! - No reinforcement contribution
//! - Strength reduction (φ-based) design format
//!
//! ## Example
//!
//! ```rust
//! use axial_core::calculations::column::{calculate, CheckStatus, ColumnInput};
//!
//! let input = ColumnInput {
//!     load_kn: 1000.0,
//!     area_mm2: 300_000.0,
//!     fc_mpa: 28.0,
//!     phi: 0.65,
//!     gamma: 1.4,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.phi_pn_kn, 4641.0);
//! assert_eq!(result.status, CheckStatus::Pass);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::equations::concrete::{
    demand_capacity_ratio, design_axial_capacity, factored_axial_load, nominal_axial_capacity,
};
use crate::errors::{CalcError, CalcResult};

pub const LOAD_MESSAGE: &str = "Axial Load must be > 0 kN";
pub const AREA_MESSAGE: &str = "Section Area must be > 0 mm²";
pub const FC_MESSAGE: &str = "Concrete strength must be > 0 MPa";
pub const PHI_MESSAGE: &str = "Strength reduction factor φ must be between 0 and 1";
pub const GAMMA_MESSAGE: &str = "Load factor γ should be ≥ 1.0";

/// Input parameters for a concrete column axial check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "load_kn": 1000.0,
///   "area_mm2": 300000.0,
///   "fc_mpa": 28.0,
///   "phi": 0.65,
///   "gamma": 1.4
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    /// Service axial load in kN
    pub load_kn: f64,

    /// Gross section area Ag in mm²
    pub area_mm2: f64,

    /// Concrete compressive strength f'c in MPa
    pub fc_mpa: f64,

    /// Strength reduction factor φ, in (0, 1]
    pub phi: f64,

    /// Load combination factor γ, at least 1.0
    pub gamma: f64,
}

impl Default for ColumnInput {
    /// 1000 kN on a 300 000 mm² section of 28 MPa concrete, φ = 0.65, γ = 1.4
    fn default() -> Self {
        ColumnInput {
            load_kn: 1000.0,
            area_mm2: 300_000.0,
            fc_mpa: 28.0,
            phi: 0.65,
            gamma: 1.4,
        }
    }
}

impl ColumnInput {
    /// Check every rule and return all violation messages (empty when valid).
    pub fn validate(&self) -> Vec<String> {
        validate(self.load_kn, self.area_mm2, self.fc_mpa, self.phi, self.gamma)
    }

    /// Run the formulas. Inputs must already have passed [`ColumnInput::validate`].
    pub fn evaluate(&self) -> ColumnResult {
        evaluate(self.load_kn, self.area_mm2, self.fc_mpa, self.phi, self.gamma)
    }
}

/// Validate the five inputs.
///
/// Every rule is checked; the returned messages follow rule order
/// (load, area, f'c, φ, γ). A NaN value fails its rule.
///
/// ```rust
/// use axial_core::calculations::column::validate;
///
/// assert!(validate(1000.0, 300_000.0, 28.0, 0.65, 1.4).is_empty());
/// assert_eq!(validate(-5.0, 300_000.0, 28.0, 0.65, 1.4), vec!["Axial Load must be > 0 kN"]);
/// ```
pub fn validate(load: f64, area: f64, fc: f64, phi: f64, gamma: f64) -> Vec<String> {
    let mut errors = Vec::new();

    if !(load > 0.0) {
        errors.push(LOAD_MESSAGE.to_string());
    }
    if !(area > 0.0) {
        errors.push(AREA_MESSAGE.to_string());
    }
    if !(fc > 0.0) {
        errors.push(FC_MESSAGE.to_string());
    }
    if !(phi > 0.0 && phi <= 1.0) {
        errors.push(PHI_MESSAGE.to_string());
    }
    if !(gamma >= 1.0) {
        errors.push(GAMMA_MESSAGE.to_string());
    }

    errors
}

/// Pass/fail outcome of the capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl CheckStatus {
    /// Classify a demand/capacity ratio. Exactly 1.0 passes.
    pub fn from_ratio(dc_ratio: f64) -> Self {
        if dc_ratio <= 1.0 {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results from the axial check. All values are unrounded.
///
/// ## JSON Example
///
/// ```json
/// {
///   "pu_kn": 1400.0,
///   "pn_kn": 7140.0,
///   "phi_pn_kn": 4641.0,
///   "dc_ratio": 0.30165912518853694,
///   "status": "PASS"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnResult {
    /// Factored axial load Pu (kN)
    pub pu_kn: f64,

    /// Nominal axial capacity Pn (kN)
    pub pn_kn: f64,

    /// Design axial capacity φPn (kN)
    pub phi_pn_kn: f64,

    /// Demand/capacity ratio Pu/φPn
    pub dc_ratio: f64,

    pub status: CheckStatus,
}

impl ColumnResult {
    /// Check if the column passes (DCR ≤ 1.0)
    pub fn passes(&self) -> bool {
        self.status == CheckStatus::Pass
    }

    /// One-line verdict for reports
    pub fn governing_message(&self) -> &'static str {
        match self.status {
            CheckStatus::Pass => "Structural capacity requirement satisfied.",
            CheckStatus::Fail => "Structural capacity exceeded.",
        }
    }
}

/// Evaluate the axial check for already-validated inputs.
///
/// Behavior on inputs that fail [`validate`] is unspecified; use
/// [`calculate`] when the inputs have not been checked.
pub fn evaluate(load: f64, area: f64, fc: f64, phi: f64, gamma: f64) -> ColumnResult {
    let pu_kn = factored_axial_load(gamma, load);
    let pn_kn = nominal_axial_capacity(fc, area);
    let phi_pn_kn = design_axial_capacity(phi, pn_kn);
    let dc_ratio = demand_capacity_ratio(pu_kn, phi_pn_kn);

    ColumnResult {
        pu_kn,
        pn_kn,
        phi_pn_kn,
        dc_ratio,
        status: CheckStatus::from_ratio(dc_ratio),
    }
}

/// Validate, then evaluate.
///
/// # Returns
///
/// * `Ok(ColumnResult)` - Calculation results
/// * `Err(CalcError::ValidationFailed)` - Every violated rule, in rule order
/// * `Err(CalcError::Domain)` - φPn came out non-positive despite valid inputs,
///   or Pu or the ratio is not finite
pub fn calculate(input: &ColumnInput) -> CalcResult<ColumnResult> {
    let errors = input.validate();
    if !errors.is_empty() {
        return Err(CalcError::validation_failed(errors));
    }

    let result = input.evaluate();

    if !(result.phi_pn_kn > 0.0) || !result.phi_pn_kn.is_finite() {
        return Err(CalcError::domain(
            "phiPn",
            result.phi_pn_kn,
            "Design capacity must be a positive finite value",
        ));
    }
    if !result.pu_kn.is_finite() {
        return Err(CalcError::domain("Pu", result.pu_kn, "Factored load must be finite"));
    }
    if !result.dc_ratio.is_finite() {
        return Err(CalcError::domain("DCR", result.dc_ratio, "Demand/capacity ratio must be finite"));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_column() -> ColumnInput {
        ColumnInput::default()
    }

    #[test]
    fn test_valid_inputs_have_no_errors() {
        assert!(default_column().validate().is_empty());
        assert!(validate(0.001, 1.0, 0.1, 1.0, 1.0).is_empty());
        assert!(validate(1e9, 1e9, 100.0, 1e-9, 10.0).is_empty());
    }

    #[test]
    fn test_each_rule_fires_on_its_own() {
        assert_eq!(validate(0.0, 300_000.0, 28.0, 0.65, 1.4), vec![LOAD_MESSAGE]);
        assert_eq!(validate(1000.0, 0.0, 28.0, 0.65, 1.4), vec![AREA_MESSAGE]);
        assert_eq!(validate(1000.0, 300_000.0, -1.0, 0.65, 1.4), vec![FC_MESSAGE]);
        assert_eq!(validate(1000.0, 300_000.0, 28.0, 0.0, 1.4), vec![PHI_MESSAGE]);
        assert_eq!(validate(1000.0, 300_000.0, 28.0, 0.65, 0.99), vec![GAMMA_MESSAGE]);
    }

    #[test]
    fn test_rules_combine_without_short_circuit() {
        let errors = validate(1000.0, 0.0, 0.0, 0.65, 1.4);
        assert_eq!(errors, vec![AREA_MESSAGE, FC_MESSAGE]);

        let all = validate(-1.0, -1.0, -1.0, 2.0, 0.5);
        assert_eq!(all, vec![LOAD_MESSAGE, AREA_MESSAGE, FC_MESSAGE, PHI_MESSAGE, GAMMA_MESSAGE]);
    }

    #[test]
    fn test_phi_bounds() {
        assert_eq!(validate(1000.0, 300_000.0, 28.0, 0.0, 1.4), vec![PHI_MESSAGE]);
        assert_eq!(validate(1000.0, 300_000.0, 28.0, 1.0000001, 1.4), vec![PHI_MESSAGE]);
        assert_eq!(validate(1000.0, 300_000.0, 28.0, -0.5, 1.4), vec![PHI_MESSAGE]);
        assert!(validate(1000.0, 300_000.0, 28.0, 1.0, 1.4).is_empty());
    }

    #[test]
    fn test_gamma_lower_bound_inclusive() {
        assert!(validate(1000.0, 300_000.0, 28.0, 0.65, 1.0).is_empty());
    }

    #[test]
    fn test_nan_fails_its_rule() {
        let errors = validate(f64::NAN, 300_000.0, 28.0, f64::NAN, 1.4);
        assert_eq!(errors, vec![LOAD_MESSAGE, PHI_MESSAGE]);
    }

    #[test]
    fn test_negative_load_reports_exactly_one_message() {
        let input = ColumnInput { load_kn: -5.0, ..default_column() };
        assert_eq!(input.validate(), vec!["Axial Load must be > 0 kN"]);
    }

    #[test]
    fn test_default_scenario_passes() {
        let result = default_column().evaluate();
        assert_eq!(result.pu_kn, 1400.0);
        assert_eq!(result.pn_kn, 7140.0);
        assert_eq!(result.phi_pn_kn, 4641.0);
        assert!((result.dc_ratio - 0.30166).abs() < 1e-5);
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.passes());
    }

    #[test]
    fn test_overload_fails() {
        let result = evaluate(5000.0, 300_000.0, 28.0, 0.65, 1.4);
        assert_eq!(result.pu_kn, 7000.0);
        assert_eq!(result.pn_kn, 7140.0);
        assert_eq!(result.phi_pn_kn, 4641.0);
        assert!((result.dc_ratio - 1.5083).abs() < 1e-4);
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.governing_message(), "Structural capacity exceeded.");
    }

    #[test]
    fn test_ratio_of_exactly_one_passes() {
        // Pu = 1.0 * 4641 = φPn
        let result = evaluate(4641.0, 300_000.0, 28.0, 0.65, 1.0);
        assert_eq!(result.dc_ratio, 1.0);
        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn test_from_ratio_boundary() {
        assert_eq!(CheckStatus::from_ratio(1.0), CheckStatus::Pass);
        assert_eq!(CheckStatus::from_ratio(1.0 + f64::EPSILON), CheckStatus::Fail);
        assert_eq!(CheckStatus::from_ratio(0.0), CheckStatus::Pass);
    }

    #[test]
    fn test_evaluate_is_bit_identical() {
        let a = evaluate(1234.567, 98_765.4, 31.3, 0.7, 1.2);
        let b = evaluate(1234.567, 98_765.4, 31.3, 0.7, 1.2);
        assert_eq!(a.pu_kn.to_bits(), b.pu_kn.to_bits());
        assert_eq!(a.pn_kn.to_bits(), b.pn_kn.to_bits());
        assert_eq!(a.phi_pn_kn.to_bits(), b.phi_pn_kn.to_bits());
        assert_eq!(a.dc_ratio.to_bits(), b.dc_ratio.to_bits());
        assert_eq!(a.status, b.status);
    }

    #[test]
    fn test_calculate_rejects_invalid_input() {
        let input = ColumnInput { area_mm2: 0.0, fc_mpa: 0.0, ..default_column() };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, CalcError::validation_failed(vec![AREA_MESSAGE.to_string(), FC_MESSAGE.to_string()]));
    }

    #[test]
    fn test_calculate_reports_underflowed_capacity() {
        // Valid but so small that φPn underflows to zero
        let input = ColumnInput {
            load_kn: 1.0,
            area_mm2: 1e-300,
            fc_mpa: 1e-300,
            phi: 0.65,
            gamma: 1.0,
        };
        assert!(input.validate().is_empty());
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_calculate_rejects_infinite_demand() {
        let input = ColumnInput { load_kn: f64::INFINITY, ..default_column() };
        assert!(input.validate().is_empty());
        match calculate(&input).unwrap_err() {
            CalcError::Domain { quantity, .. } => assert_eq!(quantity, "Pu"),
            other => panic!("expected domain error, got {:?}", other),
        }

        let overflowed = ColumnInput { load_kn: 1e308, gamma: 10.0, ..default_column() };
        assert_eq!(calculate(&overflowed).unwrap_err().error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_status_serializes_as_text() {
        assert_eq!(serde_json::to_string(&CheckStatus::Pass).unwrap(), "\"PASS\"");
        assert_eq!(CheckStatus::Fail.to_string(), "FAIL");
    }

    #[test]
    fn test_input_serialization() {
        let json = r#"{"load_kn": 5000.0, "area_mm2": 300000.0, "fc_mpa": 28.0, "phi": 0.65, "gamma": 1.4}"#;
        let input: ColumnInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, ColumnInput { load_kn: 5000.0, ..default_column() });
    }
}
