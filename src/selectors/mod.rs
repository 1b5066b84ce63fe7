//! Model-specific column selection.
//!
//! Each trained model has a fixed, ordered column list over the canonical
//! record. Selection happens after rule correction; the hormone group
//! shares the extractor and differs only in column content and menopausal
//! injection, while the infertility model additionally derives risk
//! features. Unknown model keys are a configuration error surfaced to the
//! caller.

pub mod hormone;
pub mod infertility;
pub mod menopause;
pub mod menstrual;

use std::fmt;

use crate::error::{FeatureError, Result};
use crate::frame::{ColumnSource, ColumnSpec, FeatureFrame, RowCells};
use crate::models::record::FeatureRecord;
use crate::reference::ReferenceValues;

/// Key of a servable model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKey {
    /// Serum testosterone regression
    Testosterone,
    /// Serum estradiol regression
    Estradiol,
    /// Sex-hormone-binding globulin regression
    Shbg,
    /// Menopause status classification
    Menopause,
    /// Menstrual regularity classification
    Menstrual,
    /// Infertility risk classification
    Infertility,
}

impl ModelKey {
    /// Every servable model
    pub const ALL: [Self; 6] = [
        Self::Testosterone,
        Self::Estradiol,
        Self::Shbg,
        Self::Menopause,
        Self::Menstrual,
        Self::Infertility,
    ];

    /// Canonical service key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Testosterone => "hormone_testosterone",
            Self::Estradiol => "hormone_estradiol",
            Self::Shbg => "hormone_shbg",
            Self::Menopause => "menopause",
            Self::Menstrual => "menstrual",
            Self::Infertility => "infertility",
        }
    }

    /// Parse a service key; bare hormone names are accepted as aliases
    pub fn parse(key: &str) -> Result<Self> {
        match key.trim().to_lowercase().as_str() {
            "hormone_testosterone" | "testosterone" => Ok(Self::Testosterone),
            "hormone_estradiol" | "estradiol" => Ok(Self::Estradiol),
            "hormone_shbg" | "shbg" => Ok(Self::Shbg),
            "menopause" => Ok(Self::Menopause),
            "menstrual" => Ok(Self::Menstrual),
            "infertility" => Ok(Self::Infertility),
            _ => Err(FeatureError::UnknownModel(key.to_string())),
        }
    }

    /// The three hormone submodels share one request payload
    #[must_use]
    pub const fn is_hormone(self) -> bool {
        matches!(self, Self::Testosterone | Self::Estradiol | Self::Shbg)
    }

    /// The hormone group, in reporting order
    pub const HORMONE_GROUP: [Self; 3] = [Self::Testosterone, Self::Estradiol, Self::Shbg];
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed column order for a model
#[must_use]
pub const fn column_order(model: ModelKey) -> &'static [ColumnSpec] {
    match model {
        ModelKey::Testosterone => &hormone::TESTOSTERONE_COLUMNS,
        ModelKey::Estradiol => &hormone::ESTRADIOL_COLUMNS,
        ModelKey::Shbg => &hormone::SHBG_COLUMNS,
        ModelKey::Menopause => &menopause::COLUMNS,
        ModelKey::Menstrual => &menstrual::COLUMNS,
        ModelKey::Infertility => &infertility::COLUMNS,
    }
}

/// Build one row of cells for a model from a corrected record
#[must_use]
pub fn row_cells(
    model: ModelKey,
    record: &FeatureRecord,
    reference: &ReferenceValues,
) -> RowCells {
    match model {
        ModelKey::Estradiol => hormone::estradiol_cells(record),
        ModelKey::Infertility => infertility::row_cells(record, reference),
        _ => field_cells(column_order(model), record),
    }
}

/// Project a corrected record onto a model's columns as a one-row frame
pub fn project(
    model: ModelKey,
    record: &FeatureRecord,
    reference: &ReferenceValues,
) -> Result<FeatureFrame> {
    let mut frame = FeatureFrame::new(column_order(model));
    frame.push_row(row_cells(model, record, reference))?;
    Ok(frame)
}

/// Cells for a purely field-sourced column list
pub(crate) fn field_cells(specs: &[ColumnSpec], record: &FeatureRecord) -> RowCells {
    specs
        .iter()
        .map(|spec| match spec.source {
            ColumnSource::Field(code) => record.get(code),
            ColumnSource::Derived => None,
        })
        .collect()
}
