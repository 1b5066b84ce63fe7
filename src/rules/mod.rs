//! Domain rule correction.
//!
//! Sex- and age-conditioned sentinel overrides applied to the canonical
//! record before column selection. The sentinel values are part of the
//! trained models' input contract and must not drift: 300 marks fields
//! inapplicable for male patients, 202 marks a female patient under
//! reproductive age, 203 one past it. The pass is idempotent; sentinels
//! are stable fixed points.

use crate::error::{FeatureError, Result};
use crate::models::codes::FieldCode;
use crate::models::record::FeatureRecord;

/// Sentinel for fields inapplicable to male patients
pub const MALE_NOT_APPLICABLE: f64 = 300.0;
/// Pregnancy-status sentinel for females under the lower age threshold
pub const FEMALE_UNDER_AGE: f64 = 202.0;
/// Pregnancy-status sentinel for females over the upper age threshold
pub const FEMALE_POST_REPRODUCTIVE: f64 = 203.0;

/// Lower bound of the reproductive age range, years (inclusive)
pub const LOWER_REPRODUCTIVE_AGE: f64 = 20.0;
/// Upper bound of the reproductive age range, years (inclusive)
pub const UPPER_REPRODUCTIVE_AGE: f64 = 44.0;

/// Which branch of the three-way partition fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleBranch {
    /// Male patient: pregnancy forced to 300, null reproductive fields filled
    MaleSentinel,
    /// Female under the lower age threshold: pregnancy forced to 202
    FemaleUnderAge,
    /// Female over the upper age threshold: pregnancy forced to 203
    FemalePostReproductive,
    /// Female in reproductive age range: extracted pregnancy status kept
    FemaleReproductiveAge,
}

/// Result of one corrector pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    /// The branch that applied
    pub branch: RuleBranch,
    /// Reproductive-history fields filled with the male sentinel
    pub sentinel_fills: usize,
}

/// Apply the sentinel rules in place.
///
/// Gender and age must be present; the branching cannot be evaluated
/// without them and the record fails outright. Age is taken in years,
/// falling back to months divided by 12; the stored age fields are left
/// untouched.
pub fn apply_domain_rules(record: &mut FeatureRecord) -> Result<RuleOutcome> {
    let gender = record
        .gender
        .ok_or(FeatureError::MissingDemographic("gender"))?;
    let age_years = record
        .age_years_for_rules()
        .ok_or(FeatureError::MissingDemographic("age"))?;

    let outcome = if gender == 1.0 {
        // Distinguishes "missing" from "male, not applicable": a model
        // must never read a null reproductive answer for a male patient.
        record.pregnancy_status = Some(MALE_NOT_APPLICABLE);
        let mut sentinel_fills = 0;
        for code in FieldCode::ALL {
            if code.is_reproductive_history() && record.get(code).is_none() {
                record.set(code, Some(MALE_NOT_APPLICABLE));
                sentinel_fills += 1;
            }
        }
        RuleOutcome {
            branch: RuleBranch::MaleSentinel,
            sentinel_fills,
        }
    } else if gender == 2.0 {
        let branch = if age_years < LOWER_REPRODUCTIVE_AGE {
            record.pregnancy_status = Some(FEMALE_UNDER_AGE);
            RuleBranch::FemaleUnderAge
        } else if age_years > UPPER_REPRODUCTIVE_AGE {
            record.pregnancy_status = Some(FEMALE_POST_REPRODUCTIVE);
            RuleBranch::FemalePostReproductive
        } else {
            RuleBranch::FemaleReproductiveAge
        };
        RuleOutcome {
            branch,
            sentinel_fills: 0,
        }
    } else {
        return Err(FeatureError::validation(format!(
            "Unsupported gender code: {gender}"
        )));
    };

    Ok(outcome)
}
