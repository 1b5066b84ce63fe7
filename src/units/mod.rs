//! Mass ↔ molar concentration conversion for panel analytes.
//!
//! Conversions divide or multiply by the analyte's atomic weight and the
//! molar sub-unit scale, nothing else. Null propagates: a missing reading
//! converts to a missing reading, never to zero or to a typical value.

use crate::reference::AnalyteReference;

/// Convert a mass concentration to the analyte's molar unit
#[must_use]
pub fn mass_to_molar(mass: Option<f64>, reference: &AnalyteReference) -> Option<f64> {
    mass.map(|value| value / reference.atomic_weight * reference.molar_scale)
}

/// Convert a molar concentration to the analyte's mass unit
#[must_use]
pub fn molar_to_mass(molar: Option<f64>, reference: &AnalyteReference) -> Option<f64> {
    molar.map(|value| value * reference.atomic_weight / reference.molar_scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{Analyte, ReferenceValues};

    #[test]
    fn null_propagates_both_directions() {
        let reference = ReferenceValues::default();
        assert_eq!(mass_to_molar(None, reference.analyte(Analyte::Lead)), None);
        assert_eq!(molar_to_mass(None, reference.analyte(Analyte::Mercury)), None);
    }

    #[test]
    fn mercury_uses_nanomolar_scale() {
        let reference = ReferenceValues::default();
        let molar = mass_to_molar(Some(1.0), reference.analyte(Analyte::Mercury)).unwrap();
        // 1 µg/L over 200.59 g/mol lands near 4.985 nmol/L
        assert!((molar - 4.9853).abs() < 1e-3);
    }

    #[test]
    fn round_trip_recovers_mass() {
        let reference = ReferenceValues::default();
        for analyte in Analyte::ALL {
            let spec = reference.analyte(analyte);
            let original = 0.37;
            let back = molar_to_mass(mass_to_molar(Some(original), spec), spec).unwrap();
            assert!((back - original).abs() < 1e-12, "{analyte}");
        }
    }

    #[test]
    fn lead_divides_by_atomic_weight() {
        let reference = ReferenceValues::default();
        let molar = mass_to_molar(Some(207.2), reference.analyte(Analyte::Lead)).unwrap();
        assert!((molar - 1.0).abs() < 1e-12);
    }
}
