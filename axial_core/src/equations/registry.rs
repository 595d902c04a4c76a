//! # Equation Registry
//!
//! Central registry of every equation the axial check uses.
//! Each equation carries its code reference, formula and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for reports and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use axial_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::NominalAxialCapacity, "Resistance side");
//!
//! let meta = Equation::NominalAxialCapacity.metadata();
//! assert_eq!(meta.formula_plain, "Pn = 0.85 · f'c · Ag");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code or standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// ASCE 7 - Minimum Design Loads for Buildings
    ASCE7 {
        year: u16,
        section: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318-{} Section {}", year % 100, section)
            }
            CodeReference::ASCE7 { year, section } => {
                format!("ASCE 7-{} Section {}", year % 100, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::ACI318 { .. } => "ACI 318",
            CodeReference::ASCE7 { .. } => "ASCE 7",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Factored demand
    Demand,
    /// Nominal and design strength
    Resistance,
    /// Demand/capacity checks
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Demand => "Demand",
            EquationCategory::Resistance => "Resistance",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Demand => 1,
            EquationCategory::Resistance => 2,
            EquationCategory::DesignChecks => 3,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Pu", "f'c")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kN", "mm²")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the axial check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// Pu = γ · P
    FactoredAxialLoad,
    /// Pn = 0.85 · f'c · Ag
    NominalAxialCapacity,
    /// φPn = φ · Pn
    DesignAxialCapacity,
    /// DCR = Pu / φPn
    DemandCapacityRatio,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::FactoredAxialLoad => EquationMetadata {
                name: "Factored Axial Load",
                description: "Service axial load amplified by the load combination factor",
                formula_plain: "Pu = γ · P",
                reference: CodeReference::ASCE7 { year: 2022, section: "2.3" },
                variables: vec![
                    Variable::new("Pu", "Factored axial load", "kN"),
                    Variable::new("γ", "Load combination factor", "-"),
                    Variable::new("P", "Service axial load", "kN"),
                ],
                assumptions: vec!["Single governing load combination", "Concentric axial loading only"],
                category: EquationCategory::Demand,
                source_module: "equations/concrete.rs",
                source_function: "factored_axial_load",
            },

            Equation::NominalAxialCapacity => EquationMetadata {
                name: "Nominal Axial Capacity",
                description: "Crushing strength of the gross concrete section",
                formula_plain: "Pn = 0.85 · f'c · Ag",
                reference: CodeReference::ACI318 { year: 2019, section: "22.4.2.2" },
                variables: vec![
                    Variable::new("Pn", "Nominal axial capacity", "kN"),
                    Variable::new("f'c", "Concrete compressive strength", "MPa"),
                    Variable::new("Ag", "Gross section area", "mm²"),
                ],
                assumptions: vec![
                    "Short column behavior",
                    "No slenderness effects",
                    "No reinforcement contribution",
                ],
                category: EquationCategory::Resistance,
                source_module: "equations/concrete.rs",
                source_function: "nominal_axial_capacity",
            },

            Equation::DesignAxialCapacity => EquationMetadata {
                name: "Design Axial Capacity",
                description: "Nominal capacity reduced by the strength reduction factor",
                formula_plain: "φPn = φ · Pn",
                reference: CodeReference::ACI318 { year: 2019, section: "21.2" },
                variables: vec![
                    Variable::new("φPn", "Design axial capacity", "kN"),
                    Variable::new("φ", "Strength reduction factor", "-"),
                    Variable::new("Pn", "Nominal axial capacity", "kN"),
                ],
                assumptions: vec!["0 < φ ≤ 1"],
                category: EquationCategory::Resistance,
                source_module: "equations/concrete.rs",
                source_function: "design_axial_capacity",
            },

            Equation::DemandCapacityRatio => EquationMetadata {
                name: "Demand/Capacity Ratio",
                description: "Utilization of the design capacity; passes when not greater than 1.0",
                formula_plain: "DCR = Pu / φPn",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("DCR", "Demand/capacity ratio", "-"),
                    Variable::new("Pu", "Factored axial load", "kN"),
                    Variable::new("φPn", "Design axial capacity", "kN"),
                ],
                assumptions: vec!["DCR = 1.0 exactly is a pass"],
                category: EquationCategory::DesignChecks,
                source_module: "equations/concrete.rs",
                source_function: "demand_capacity_ratio",
            },
        }
    }

    /// Get all equations in a specific category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in sort order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories = vec![
            EquationCategory::Demand,
            EquationCategory::Resistance,
            EquationCategory::DesignChecks,
        ];
        categories.sort_by_key(|c| c.sort_order());
        categories
    }
}

/// Every registered equation, in evaluation order.
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::FactoredAxialLoad,
    Equation::NominalAxialCapacity,
    Equation::DesignAxialCapacity,
    Equation::DemandCapacityRatio,
];

/// Equations applied by one axial column check, in evaluation order.
pub fn column_calculation_equations() -> Vec<Equation> {
    ALL_EQUATIONS.to_vec()
}

// ============================================================================
// Usage Tracking
// ============================================================================

/// Record of an equation being applied during a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Resistance side")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collects equation usages during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// All recorded usages, in order
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Unique equations in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = Vec::new();
        for usage in &self.usages {
            if !seen.contains(&usage.equation) {
                seen.push(usage.equation);
            }
        }
        seen
    }

    /// Plain-text formula reference for the recorded equations, one per line
    pub fn formula_reference(&self) -> Vec<String> {
        self.unique_equations()
            .iter()
            .map(|eq| eq.metadata().formula_plain.to_string())
            .collect()
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the equations reference document (EQUATIONS.md).
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(4_000);

    output.push_str(
        r#"# Axial Check Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the concrete axial capacity check.
Each equation includes its formula, code reference, source location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Forces (P, Pu, Pn, φPn) | kN |
| Concrete strength f'c | MPa |
| Gross area Ag | mm² |
| Factors (γ, φ, DCR) | dimensionless |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`](src/{})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}
