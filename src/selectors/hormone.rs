//! Column orders for the hormone group.
//!
//! Testosterone, estradiol, and SHBG share the extractor and the corrector;
//! they differ in column subset and order, and estradiol alone carries the
//! menopausal flag, injected as 0 when the record has no answer. All three
//! frames are fully numeric.

use crate::frame::{ColumnSource, ColumnSpec, RowCells};
use crate::models::codes::FieldCode;
use crate::models::record::FeatureRecord;
use crate::selectors::field_cells;

/// Testosterone model columns
pub const TESTOSTERONE_COLUMNS: [ColumnSpec; 10] = [
    ColumnSpec::numeric(FieldCode::SeleniumMolar),
    ColumnSpec::numeric(FieldCode::MercuryMolar),
    ColumnSpec::numeric(FieldCode::CadmiumMolar),
    ColumnSpec::numeric(FieldCode::LeadMolar),
    ColumnSpec::numeric(FieldCode::AgeMonths),
    ColumnSpec::numeric(FieldCode::ManganeseMolar),
    ColumnSpec::numeric(FieldCode::EverPregnant),
    ColumnSpec::numeric(FieldCode::Gender),
    ColumnSpec::numeric(FieldCode::PregnancyStatus),
    ColumnSpec::numeric(FieldCode::Bmi),
];

/// Estradiol model columns; the ever-pregnant indicator is served under
/// the RHQ160 name here
pub const ESTRADIOL_COLUMNS: [ColumnSpec; 14] = [
    ColumnSpec::numeric(FieldCode::PregnancyStatus),
    ColumnSpec::numeric(FieldCode::ManganeseMolar),
    ColumnSpec::numeric(FieldCode::AgeMonths),
    ColumnSpec::numeric(FieldCode::SeleniumMolar),
    ColumnSpec::numeric(FieldCode::Bmi),
    ColumnSpec::numeric(FieldCode::CadmiumMolar),
    ColumnSpec::numeric(FieldCode::MercuryMolar),
    ColumnSpec::numeric(FieldCode::LeadMolar),
    ColumnSpec::numeric(FieldCode::RegularPeriods),
    ColumnSpec::renamed(FieldCode::EverPregnant, "RHQ160"),
    ColumnSpec::numeric(FieldCode::Menopausal),
    ColumnSpec::numeric(FieldCode::Breastfeeding),
    ColumnSpec::numeric(FieldCode::Gender),
    ColumnSpec::numeric(FieldCode::AbdominalDiameter),
];

/// SHBG model columns
pub const SHBG_COLUMNS: [ColumnSpec; 11] = [
    ColumnSpec::numeric(FieldCode::Bmi),
    ColumnSpec::numeric(FieldCode::AgeMonths),
    ColumnSpec::numeric(FieldCode::PregnancyStatus),
    ColumnSpec::numeric(FieldCode::ManganeseMolar),
    ColumnSpec::numeric(FieldCode::LeadMolar),
    ColumnSpec::numeric(FieldCode::SeleniumMolar),
    ColumnSpec::numeric(FieldCode::MercuryMolar),
    ColumnSpec::numeric(FieldCode::CadmiumMolar),
    ColumnSpec::renamed(FieldCode::EverPregnant, "RHQ160"),
    ColumnSpec::numeric(FieldCode::Gender),
    ColumnSpec::numeric(FieldCode::AbdominalDiameter),
];

/// Estradiol row with the menopausal injection applied
#[must_use]
pub fn estradiol_cells(record: &FeatureRecord) -> RowCells {
    let mut cells = field_cells(&ESTRADIOL_COLUMNS, record);
    let menopausal = ESTRADIOL_COLUMNS
        .iter()
        .position(|spec| spec.source == ColumnSource::Field(FieldCode::Menopausal));
    if let Some(index) = menopausal {
        if cells[index].is_none() {
            // No answer reads as "not menopausal" for this model only.
            cells[index] = Some(0.0);
        }
    }
    cells
}
