//! Risk derivation for the infertility model.
//!
//! Bins the five mass concentrations into ordinal tiers and derives the
//! composite indices the model consumes. Inputs are expected to have gone
//! through detection-limit substitution already, so a reading absent from
//! the panel arrives here as its LLOD/√2 substitute and bins to tier 0.
//! For the toxic metals that treats an unmeasured sample as unexposed, a
//! policy carried over from the trained models; it needs domain-expert
//! review before being relied on as clinically sound.

use crate::reference::{Analyte, ReferenceValues};

/// Ordinal risk tier for one analyte
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskTier {
    /// Tier 0. For selenium this reads "deficient", not "safe".
    Low,
    /// Tier 1
    Medium,
    /// Tier 2
    High,
}

impl RiskTier {
    /// Numeric tier value as the models consume it
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Medium => 1.0,
            Self::High => 2.0,
        }
    }
}

/// Bin one concentration with the analyte's cut points.
///
/// Both cut points are inclusive upper bounds: a value exactly at `low`
/// stays tier 0, exactly at `medium` stays tier 1.
#[must_use]
pub fn bin_tier(value: f64, low: f64, medium: f64) -> RiskTier {
    if value <= low {
        RiskTier::Low
    } else if value <= medium {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

/// Tiers and composite indices for one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetalRiskProfile {
    /// Lead tier
    pub lead: RiskTier,
    /// Cadmium tier
    pub cadmium: RiskTier,
    /// Mercury tier
    pub mercury: RiskTier,
    /// Selenium tier (inverted interpretation, same mechanics)
    pub selenium: RiskTier,
    /// Manganese tier
    pub manganese: RiskTier,
    /// Sum of the lead, cadmium, and mercury tier values (0-6)
    pub toxic_risk_score: f64,
    /// At least two of the four toxic-relevant tiers (lead, cadmium,
    /// mercury, manganese) are high
    pub multi_high_risk: bool,
    /// High-toxic count minus the count of depleted protective analytes
    pub risk_imbalance: f64,
    /// Lead and cadmium simultaneously high
    pub high_lead_cadmium: bool,
    /// Selenium deficient while the toxic score is elevated
    pub low_selenium_high_toxics: bool,
}

impl MetalRiskProfile {
    /// Tier for one analyte
    #[must_use]
    pub const fn tier(&self, analyte: Analyte) -> RiskTier {
        match analyte {
            Analyte::Lead => self.lead,
            Analyte::Cadmium => self.cadmium,
            Analyte::Mercury => self.mercury,
            Analyte::Selenium => self.selenium,
            Analyte::Manganese => self.manganese,
        }
    }
}

/// Derive the full risk profile from the imputed mass panel, ordered as
/// [`Analyte::ALL`]
#[must_use]
pub fn derive_profile(panel: &[f64; 5], reference: &ReferenceValues) -> MetalRiskProfile {
    let mut tiers = [RiskTier::Low; 5];
    for (slot, (analyte, value)) in tiers.iter_mut().zip(Analyte::ALL.iter().zip(panel)) {
        let spec = reference.analyte(*analyte);
        *slot = bin_tier(*value, spec.risk_low, spec.risk_medium);
    }
    let [lead, cadmium, mercury, selenium, manganese] = tiers;

    let toxic_risk_score = lead.value() + cadmium.value() + mercury.value();
    let high_toxics = [lead, cadmium, mercury]
        .iter()
        .filter(|tier| **tier == RiskTier::High)
        .count();
    // The toxic-relevant set (everything but selenium) comes from the
    // reference enum, not a second list here.
    let toxic_relevant_high = Analyte::ALL
        .iter()
        .zip(tiers)
        .filter(|(analyte, tier)| analyte.is_toxic() && *tier == RiskTier::High)
        .count();
    let depleted_protective = [selenium, manganese]
        .iter()
        .filter(|tier| **tier == RiskTier::Low)
        .count();

    MetalRiskProfile {
        lead,
        cadmium,
        mercury,
        selenium,
        manganese,
        toxic_risk_score,
        multi_high_risk: toxic_relevant_high >= 2,
        risk_imbalance: high_toxics as f64 - depleted_protective as f64,
        high_lead_cadmium: lead == RiskTier::High && cadmium == RiskTier::High,
        low_selenium_high_toxics: selenium == RiskTier::Low && toxic_risk_score >= 4.0,
    }
}
