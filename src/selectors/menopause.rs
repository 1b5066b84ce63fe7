//! Column order for the menopause model.
//!
//! The classifier was trained on a mixed frame: panel and body measures
//! numeric, survey answers as categorical strings. The string rendering is
//! a type contract, not cosmetics; the downstream encoder matches on
//! string categories.

use crate::frame::ColumnSpec;
use crate::models::codes::FieldCode;

/// Menopause model columns
pub const COLUMNS: [ColumnSpec; 11] = [
    ColumnSpec::numeric(FieldCode::AgeYears),
    ColumnSpec::numeric(FieldCode::Bmi),
    ColumnSpec::numeric(FieldCode::LeadMolar),
    ColumnSpec::numeric(FieldCode::CadmiumMolar),
    ColumnSpec::numeric(FieldCode::MercuryMolar),
    ColumnSpec::numeric(FieldCode::SeleniumMolar),
    ColumnSpec::numeric(FieldCode::ManganeseMolar),
    ColumnSpec::categorical(FieldCode::RegularPeriods),
    ColumnSpec::numeric(FieldCode::LastPeriodAge),
    ColumnSpec::categorical(FieldCode::FemaleHormones),
    ColumnSpec::categorical(FieldCode::MaritalStatus),
];
