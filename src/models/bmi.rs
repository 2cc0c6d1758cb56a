use serde::{Deserialize, Serialize};

/// WHO adult BMI bands, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SevereThinness,
    ModerateThinness,
    MildThinness,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

/// Exclusive upper bound of each band. First match wins.
pub const THRESHOLDS: [(f64, BmiCategory); 8] = [
    (16.0, BmiCategory::SevereThinness),
    (17.0, BmiCategory::ModerateThinness),
    (18.5, BmiCategory::MildThinness),
    (25.0, BmiCategory::Normal),
    (30.0, BmiCategory::Overweight),
    (35.0, BmiCategory::ObeseClass1),
    (40.0, BmiCategory::ObeseClass2),
    (f64::INFINITY, BmiCategory::ObeseClass3),
];

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SevereThinness => "Severe Thinness",
            Self::ModerateThinness => "Moderate Thinness",
            Self::MildThinness => "Mild Thinness",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::ObeseClass1 => "Obese Class I",
            Self::ObeseClass2 => "Obese Class II",
            Self::ObeseClass3 => "Obese Class III",
        }
    }

    pub fn range_label(&self) -> &'static str {
        match self {
            Self::SevereThinness => "Below 16",
            Self::ModerateThinness => "16-16.9",
            Self::MildThinness => "17-18.4",
            Self::Normal => "18.5-24.9",
            Self::Overweight => "25-29.9",
            Self::ObeseClass1 => "30-34.9",
            Self::ObeseClass2 => "35-39.9",
            Self::ObeseClass3 => "40+",
        }
    }

    /// Display color token (hex RGB).
    pub fn color(&self) -> &'static str {
        match self {
            Self::SevereThinness => "#FF3C3C",
            Self::ModerateThinness => "#FF5C5C",
            Self::MildThinness => "#FFA400",
            Self::Normal => "#2DC653",
            Self::Overweight => "#FFA400",
            Self::ObeseClass1 => "#FF7E3C",
            Self::ObeseClass2 => "#FF5C3C",
            Self::ObeseClass3 => "#FF3C3C",
        }
    }

    /// Translation key for the category name.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SevereThinness => "bmiSevereThinness",
            Self::ModerateThinness => "bmiModerateThinness",
            Self::MildThinness => "bmiMildThinness",
            Self::Normal => "bmiNormal",
            Self::Overweight => "bmiOverweight",
            Self::ObeseClass1 => "bmiObeseClass1",
            Self::ObeseClass2 => "bmiObeseClass2",
            Self::ObeseClass3 => "bmiObeseClass3",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    /// Rounded to one decimal for display.
    pub value: f64,
    /// Unrounded; classification and risks use this.
    pub raw_value: f64,
    pub category: BmiCategory,
    pub color: String,
    pub range: String,
    /// Set for minors. The bands themselves are not adjusted.
    pub child_advisory: bool,
}
