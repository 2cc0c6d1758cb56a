use serde::{Deserialize, Serialize};

/// Qualitative health-risk note. Rendered to text by the translation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthRisk {
    NutritionalDeficiencies,
    WeakenedImmuneSystem,
    SevereHealthComplications,
    IncreasedHeartDisease,
    HigherType2Diabetes,
    HighHeartDiseaseStroke,
    HighType2Diabetes,
    IncreasedCertainCancers,
    EarlyOnsetDiabetes,
    HigherFrailtyFalls,
    PotentialReproductiveIssues,
}

impl HealthRisk {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NutritionalDeficiencies => "riskNutritionalDeficiencies",
            Self::WeakenedImmuneSystem => "riskWeakenedImmuneSystem",
            Self::SevereHealthComplications => "riskSevereHealthComplications",
            Self::IncreasedHeartDisease => "riskIncreasedHeartDisease",
            Self::HigherType2Diabetes => "riskHigherType2Diabetes",
            Self::HighHeartDiseaseStroke => "riskHighHeartDiseaseStroke",
            Self::HighType2Diabetes => "riskHighType2Diabetes",
            Self::IncreasedCertainCancers => "riskIncreasedCertainCancers",
            Self::EarlyOnsetDiabetes => "riskEarlyOnsetDiabetes",
            Self::HigherFrailtyFalls => "riskHigherFrailtyFalls",
            Self::PotentialReproductiveIssues => "riskPotentialReproductiveIssues",
        }
    }
}
