//! # Concrete Axial Compression Formulas
//!
//! Closed-form equations for a short, concentrically loaded concrete column.
//!
//! ## Notation
//!
//! - `P` = Service axial load (kN)
//! - `γ` = Load combination factor
//! - `Pu` = Factored axial load (kN)
//! - `f'c` = Specified concrete compressive strength (MPa)
//! - `Ag` = Gross section area (mm²)
//! - `Pn` = Nominal axial capacity (kN)
//! - `φ` = Strength reduction factor
//! - `φPn` = Design axial capacity (kN)
//!
//! ## Units
//!
//! f'c in MPa (N/mm²) times Ag in mm² gives newtons; the `/ 1000` converts to kN.
//!
//! ## References
//!
//! - ACI 318-19 Section 22.4.2 (nominal axial strength, unreinforced form)
//! - ACI 318-19 Section 21.2 (strength reduction factors)
//!
//! The operation order inside each function is fixed. Reordering the
//! multiplications changes the last bit of the result and with it the
//! result signature.

/// Uniform stress block intensity factor
pub const STRESS_BLOCK_FACTOR: f64 = 0.85;

/// Newtons per kilonewton
pub const N_PER_KN: f64 = 1000.0;

/// Factored (demand) axial load
///
/// # Formula
/// Pu = γ × P
///
/// # Example
/// ```rust
/// use axial_core::equations::concrete::factored_axial_load;
///
/// assert_eq!(factored_axial_load(1.4, 1000.0), 1400.0);
/// ```
#[inline]
pub fn factored_axial_load(gamma: f64, load_kn: f64) -> f64 {
    gamma * load_kn
}

/// Nominal axial capacity of the gross concrete section
///
/// ```text
///   ┌───────────┐
///   │░░░░░░░░░░░│  0.85 f'c over Ag
///   │░░░░░░░░░░░│
///   └───────────┘
/// ```
///
/// # Formula
/// Pn = 0.85 × f'c × Ag / 1000
///
/// Reinforcement is ignored.
///
/// # Example
/// ```rust
/// use axial_core::equations::concrete::nominal_axial_capacity;
///
/// // 28 MPa concrete, 300 000 mm² section
/// assert_eq!(nominal_axial_capacity(28.0, 300_000.0), 7140.0);
/// ```
#[inline]
pub fn nominal_axial_capacity(fc_mpa: f64, area_mm2: f64) -> f64 {
    STRESS_BLOCK_FACTOR * fc_mpa * area_mm2 / N_PER_KN
}

/// Design (reduced) axial capacity
///
/// # Formula
/// φPn = φ × Pn
#[inline]
pub fn design_axial_capacity(phi: f64, pn_kn: f64) -> f64 {
    phi * pn_kn
}

/// Demand/capacity ratio
///
/// # Formula
/// DCR = Pu / φPn
///
/// A ratio of exactly 1.0 is acceptable.
#[inline]
pub fn demand_capacity_ratio(pu_kn: f64, phi_pn_kn: f64) -> f64 {
    pu_kn / phi_pn_kn
}
