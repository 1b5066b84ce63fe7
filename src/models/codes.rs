//! Canonical field codes for the feature record.
//!
//! Each code pairs a semantic name with the fixed survey-style identifier
//! the trained models were fit against. Column orders and diagnostics both
//! speak in these codes; nothing downstream depends on record insertion
//! order.

use std::fmt;

use crate::reference::Analyte;

/// One canonical field of the feature record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCode {
    /// RIDAGEMN, age in months
    AgeMonths,
    /// RIDAGEYR, age in years
    AgeYears,
    /// RIAGENDR, gender code (1 male, 2 female)
    Gender,
    /// RIDEXPRG, pregnancy status (0/1 or an applicability sentinel)
    PregnancyStatus,
    /// RIDRETH3, race/ethnicity code
    Race,
    /// DMDBORN4, country-of-birth code
    CountryOfBirth,
    /// DMDMARTL, marital status code 1-7
    MaritalStatus,
    /// RHQ131, ever-pregnant indicator derived from the pregnancy count
    EverPregnant,
    /// RHQ031, regular periods
    RegularPeriods,
    /// RHQ200, currently breastfeeding
    Breastfeeding,
    /// RHQ060, age at last menstrual period
    LastPeriodAge,
    /// RHQ074, tried a year to become pregnant
    TriedPregnancyYear,
    /// RHQ078, treated for a pelvic infection
    PelvicInfection,
    /// RHQ305, both ovaries removed
    OvariesRemoved,
    /// RHQ420, ever used birth-control pills
    BirthControl,
    /// RHQ540, ever used female hormones
    FemaleHormones,
    /// RHD280, had a hysterectomy
    Hysterectomy,
    /// `is_menopausal`, menopausal status flag
    Menopausal,
    /// BMXBMI, body-mass index
    Bmi,
    /// BMDSADCM, sagittal abdominal diameter in cm
    AbdominalDiameter,
    /// WTSH2YR, panel survey weight
    SurveyWeight,
    /// LBDBPBSI, blood lead, µmol/L
    LeadMolar,
    /// LBDBCDSI, blood cadmium, µmol/L
    CadmiumMolar,
    /// LBDTHGSI, blood mercury, nmol/L
    MercuryMolar,
    /// LBDBSESI, blood selenium, µmol/L
    SeleniumMolar,
    /// LBDBMNSI, blood manganese, µmol/L
    ManganeseMolar,
    /// LBXBPB, blood lead, µg/dL
    LeadMass,
    /// LBXBCD, blood cadmium, µg/L
    CadmiumMass,
    /// LBXTHG, blood mercury, µg/L
    MercuryMass,
    /// LBXBSE, blood selenium, µg/L
    SeleniumMass,
    /// LBXBMN, blood manganese, µg/L
    ManganeseMass,
}

impl FieldCode {
    /// Every canonical field, in schema order
    pub const ALL: [Self; 31] = [
        Self::AgeMonths,
        Self::AgeYears,
        Self::Gender,
        Self::PregnancyStatus,
        Self::Race,
        Self::CountryOfBirth,
        Self::MaritalStatus,
        Self::EverPregnant,
        Self::RegularPeriods,
        Self::Breastfeeding,
        Self::LastPeriodAge,
        Self::TriedPregnancyYear,
        Self::PelvicInfection,
        Self::OvariesRemoved,
        Self::BirthControl,
        Self::FemaleHormones,
        Self::Hysterectomy,
        Self::Menopausal,
        Self::Bmi,
        Self::AbdominalDiameter,
        Self::SurveyWeight,
        Self::LeadMolar,
        Self::CadmiumMolar,
        Self::MercuryMolar,
        Self::SeleniumMolar,
        Self::ManganeseMolar,
        Self::LeadMass,
        Self::CadmiumMass,
        Self::MercuryMass,
        Self::SeleniumMass,
        Self::ManganeseMass,
    ];

    /// The fixed survey identifier for this field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AgeMonths => "RIDAGEMN",
            Self::AgeYears => "RIDAGEYR",
            Self::Gender => "RIAGENDR",
            Self::PregnancyStatus => "RIDEXPRG",
            Self::Race => "RIDRETH3",
            Self::CountryOfBirth => "DMDBORN4",
            Self::MaritalStatus => "DMDMARTL",
            Self::EverPregnant => "RHQ131",
            Self::RegularPeriods => "RHQ031",
            Self::Breastfeeding => "RHQ200",
            Self::LastPeriodAge => "RHQ060",
            Self::TriedPregnancyYear => "RHQ074",
            Self::PelvicInfection => "RHQ078",
            Self::OvariesRemoved => "RHQ305",
            Self::BirthControl => "RHQ420",
            Self::FemaleHormones => "RHQ540",
            Self::Hysterectomy => "RHD280",
            Self::Menopausal => "is_menopausal",
            Self::Bmi => "BMXBMI",
            Self::AbdominalDiameter => "BMDSADCM",
            Self::SurveyWeight => "WTSH2YR",
            Self::LeadMolar => "LBDBPBSI",
            Self::CadmiumMolar => "LBDBCDSI",
            Self::MercuryMolar => "LBDTHGSI",
            Self::SeleniumMolar => "LBDBSESI",
            Self::ManganeseMolar => "LBDBMNSI",
            Self::LeadMass => "LBXBPB",
            Self::CadmiumMass => "LBXBCD",
            Self::MercuryMass => "LBXTHG",
            Self::SeleniumMass => "LBXBSE",
            Self::ManganeseMass => "LBXBMN",
        }
    }

    /// Reproductive-history fields, the set the male sentinel fill covers.
    /// The menopausal flag belongs here even though its identifier is not
    /// RHQ-prefixed.
    #[must_use]
    pub const fn is_reproductive_history(self) -> bool {
        matches!(
            self,
            Self::EverPregnant
                | Self::RegularPeriods
                | Self::Breastfeeding
                | Self::LastPeriodAge
                | Self::TriedPregnancyYear
                | Self::PelvicInfection
                | Self::OvariesRemoved
                | Self::BirthControl
                | Self::FemaleHormones
                | Self::Hysterectomy
                | Self::Menopausal
        )
    }

    /// The molar-concentration field for an analyte
    #[must_use]
    pub const fn molar(analyte: Analyte) -> Self {
        match analyte {
            Analyte::Lead => Self::LeadMolar,
            Analyte::Cadmium => Self::CadmiumMolar,
            Analyte::Mercury => Self::MercuryMolar,
            Analyte::Selenium => Self::SeleniumMolar,
            Analyte::Manganese => Self::ManganeseMolar,
        }
    }

    /// The mass-concentration field for an analyte
    #[must_use]
    pub const fn mass(analyte: Analyte) -> Self {
        match analyte {
            Analyte::Lead => Self::LeadMass,
            Analyte::Cadmium => Self::CadmiumMass,
            Analyte::Mercury => Self::MercuryMass,
            Analyte::Selenium => Self::SeleniumMass,
            Analyte::Manganese => Self::ManganeseMass,
        }
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
