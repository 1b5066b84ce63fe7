//! Missing-value and detection-limit imputation.
//!
//! Two policies, applied on the infertility path only and in a fixed
//! order: detection-limit substitution runs before risk binning, and the
//! terminal zero-fill for non-biomarker gaps runs after the sentinel and
//! risk stages, so those more specific codes always win.

use std::f64::consts::SQRT_2;

use crate::models::codes::FieldCode;
use crate::models::record::FeatureRecord;
use crate::reference::{Analyte, ReferenceValues};

/// Standard substitute for a left-censored reading: LLOD / √2
#[must_use]
pub fn detection_limit_substitute(value: Option<f64>, detection_limit: f64) -> f64 {
    value.unwrap_or(detection_limit / SQRT_2)
}

/// The five mass concentrations in panel order, nulls replaced with each
/// analyte's detection-limit substitute
#[must_use]
pub fn filled_mass_panel(record: &FeatureRecord, reference: &ReferenceValues) -> [f64; 5] {
    Analyte::ALL.map(|analyte| {
        detection_limit_substitute(
            record.get(FieldCode::mass(analyte)),
            reference.analyte(analyte).detection_limit,
        )
    })
}

/// Terminal fallback for non-biomarker categorical and demographic gaps
#[must_use]
pub fn zero_fill(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_reading_becomes_llod_over_sqrt2() {
        let substitute = detection_limit_substitute(None, 0.05);
        assert!((substitute - 0.035_355).abs() < 1e-5);
    }

    #[test]
    fn present_reading_passes_through() {
        assert_eq!(detection_limit_substitute(Some(1.7), 0.05), 1.7);
        // A measured zero is a value, not a gap.
        assert_eq!(detection_limit_substitute(Some(0.0), 0.05), 0.0);
    }

    #[test]
    fn panel_fill_uses_each_analytes_limit() {
        let mut record = FeatureRecord::new();
        record.lead_mass = Some(1.2);
        let panel = filled_mass_panel(&record, &ReferenceValues::default());
        assert_eq!(panel[0], 1.2);
        assert!((panel[1] - 0.07 / SQRT_2).abs() < 1e-12);
        assert!((panel[3] - 59.35 / SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn zero_fill_only_touches_null() {
        assert_eq!(zero_fill(None), 0.0);
        assert_eq!(zero_fill(Some(7.0)), 7.0);
    }
}
