use crate::models::measurement::Gender;
use crate::models::risk::HealthRisk;

/// Derive risk notes from an unrounded BMI.
///
/// Groups are concatenated without deduplication: BMI band first, then age,
/// then gender.
pub fn assess(bmi: f64, age: Option<u8>, gender: Option<Gender>) -> Vec<HealthRisk> {
    let mut risks = Vec::new();

    if bmi < 18.5 {
        risks.push(HealthRisk::NutritionalDeficiencies);
        risks.push(HealthRisk::WeakenedImmuneSystem);
        if bmi < 16.0 {
            risks.push(HealthRisk::SevereHealthComplications);
        }
    } else if bmi < 25.0 {
        // normal band carries no notes
    } else if bmi < 30.0 {
        risks.push(HealthRisk::IncreasedHeartDisease);
        risks.push(HealthRisk::HigherType2Diabetes);
    } else {
        risks.push(HealthRisk::HighHeartDiseaseStroke);
        risks.push(HealthRisk::HighType2Diabetes);
        risks.push(HealthRisk::IncreasedCertainCancers);
        if bmi >= 40.0 {
            risks.push(HealthRisk::SevereHealthComplications);
        }
    }

    if let Some(age) = age {
        if age < 18 && bmi > 30.0 {
            risks.push(HealthRisk::EarlyOnsetDiabetes);
        } else if age > 65 && bmi < 22.0 {
            risks.push(HealthRisk::HigherFrailtyFalls);
        }
    }

    if gender == Some(Gender::Female) && bmi < 18.5 {
        risks.push(HealthRisk::PotentialReproductiveIssues);
    }

    risks
}
