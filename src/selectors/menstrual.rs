//! Column order for the menstrual-regularity model.
//!
//! Same mixed typing contract as the menopause model: survey answers go
//! downstream as categorical strings.

use crate::frame::ColumnSpec;
use crate::models::codes::FieldCode;

/// Menstrual model columns
pub const COLUMNS: [ColumnSpec; 12] = [
    ColumnSpec::numeric(FieldCode::AgeMonths),
    ColumnSpec::numeric(FieldCode::Bmi),
    ColumnSpec::numeric(FieldCode::PregnancyStatus),
    ColumnSpec::numeric(FieldCode::LeadMolar),
    ColumnSpec::numeric(FieldCode::CadmiumMolar),
    ColumnSpec::numeric(FieldCode::MercuryMolar),
    ColumnSpec::numeric(FieldCode::SeleniumMolar),
    ColumnSpec::numeric(FieldCode::ManganeseMolar),
    ColumnSpec::categorical(FieldCode::RegularPeriods),
    ColumnSpec::categorical(FieldCode::BirthControl),
    ColumnSpec::categorical(FieldCode::Breastfeeding),
    ColumnSpec::numeric(FieldCode::AbdominalDiameter),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ColumnKind;

    #[test]
    fn order_and_typing_are_pinned() {
        let names: Vec<&str> = COLUMNS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "RIDAGEMN", "BMXBMI", "RIDEXPRG", "LBDBPBSI", "LBDBCDSI", "LBDTHGSI",
                "LBDBSESI", "LBDBMNSI", "RHQ031", "RHQ420", "RHQ200", "BMDSADCM"
            ]
        );
        assert_eq!(
            COLUMNS.iter().filter(|s| s.kind == ColumnKind::Categorical).count(),
            3
        );
    }
}
