//! Fixed reference values for the blood-metal panel.
//!
//! Atomic weights, detection limits, and risk cut points are
//! model-compatibility constants: the trained models were fit against
//! features produced with exactly these numbers, so any change here is a
//! breaking change and must be versioned alongside the model artifacts.
//! The table is immutable, built once, and passed into the pipeline
//! explicitly rather than read from global state.

use std::fmt;

/// Version tag for the constants below, tracked with the trained models
pub const REFERENCE_VERSION: &str = "nhanes-metals.v1";

/// The five analytes of the blood heavy-metal panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Analyte {
    Lead,
    Cadmium,
    Mercury,
    Selenium,
    Manganese,
}

impl Analyte {
    /// All panel analytes, in canonical order
    pub const ALL: [Self; 5] = [
        Self::Lead,
        Self::Cadmium,
        Self::Mercury,
        Self::Selenium,
        Self::Manganese,
    ];

    /// Lowercase analyte name as used in wire column names
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Cadmium => "cadmium",
            Self::Mercury => "mercury",
            Self::Selenium => "selenium",
            Self::Manganese => "manganese",
        }
    }

    /// True for the metals whose elevated tiers feed the toxic composites
    #[must_use]
    pub const fn is_toxic(self) -> bool {
        matches!(self, Self::Lead | Self::Cadmium | Self::Mercury | Self::Manganese)
    }
}

impl fmt::Display for Analyte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constants for one analyte
#[derive(Debug, Clone, Copy)]
pub struct AnalyteReference {
    /// Atomic weight in g/mol, the mass↔molar divisor
    pub atomic_weight: f64,
    /// Sub-unit scale for the molar field (1000 for mercury's nmol/L,
    /// 1 for the µmol/L analytes)
    pub molar_scale: f64,
    /// Assay limit of detection, in the analyte's mass unit
    pub detection_limit: f64,
    /// Upper bound of risk tier 0 (inclusive), mass unit
    pub risk_low: f64,
    /// Upper bound of risk tier 1 (inclusive), mass unit
    pub risk_medium: f64,
    /// Human-readable mass unit, for diagnostics
    pub mass_unit: &'static str,
    /// Human-readable molar unit, for diagnostics
    pub molar_unit: &'static str,
}

/// Immutable table of per-analyte reference values
#[derive(Debug, Clone)]
pub struct ReferenceValues {
    /// Version tag recorded in outcomes and logs
    pub version: &'static str,
    lead: AnalyteReference,
    cadmium: AnalyteReference,
    mercury: AnalyteReference,
    selenium: AnalyteReference,
    manganese: AnalyteReference,
}

impl ReferenceValues {
    /// Look up the constants for one analyte
    #[must_use]
    pub const fn analyte(&self, analyte: Analyte) -> &AnalyteReference {
        match analyte {
            Analyte::Lead => &self.lead,
            Analyte::Cadmium => &self.cadmium,
            Analyte::Mercury => &self.mercury,
            Analyte::Selenium => &self.selenium,
            Analyte::Manganese => &self.manganese,
        }
    }
}

impl Default for ReferenceValues {
    fn default() -> Self {
        Self {
            version: REFERENCE_VERSION,
            // Lead is reported in µg/dL; the other mass units are µg/L.
            lead: AnalyteReference {
                atomic_weight: 207.2,
                molar_scale: 1.0,
                detection_limit: 0.05,
                risk_low: 1.0,
                risk_medium: 2.0,
                mass_unit: "ug/dL",
                molar_unit: "umol/L",
            },
            cadmium: AnalyteReference {
                atomic_weight: 112.41,
                molar_scale: 1.0,
                detection_limit: 0.07,
                risk_low: 0.3,
                risk_medium: 0.5,
                mass_unit: "ug/L",
                molar_unit: "umol/L",
            },
            // Mercury circulates at far lower concentrations, hence the
            // nmol/L sub-unit on the molar side.
            mercury: AnalyteReference {
                atomic_weight: 200.59,
                molar_scale: 1000.0,
                detection_limit: 0.2,
                risk_low: 1.0,
                risk_medium: 3.0,
                mass_unit: "ug/L",
                molar_unit: "nmol/L",
            },
            // Selenium tiers invert in interpretation (tier 0 = deficient);
            // the bin mechanics are unchanged.
            selenium: AnalyteReference {
                atomic_weight: 78.97,
                molar_scale: 1.0,
                detection_limit: 59.35,
                risk_low: 120.0,
                risk_medium: 180.0,
                mass_unit: "ug/L",
                molar_unit: "umol/L",
            },
            manganese: AnalyteReference {
                atomic_weight: 54.94,
                molar_scale: 1.0,
                detection_limit: 2.21,
                risk_low: 8.0,
                risk_medium: 12.0,
                mass_unit: "ug/L",
                molar_unit: "umol/L",
            },
        }
    }
}
