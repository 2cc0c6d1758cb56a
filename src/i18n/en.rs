pub const ENTRIES: &[(&str, &str)] = &[
    ("bmiSevereThinness", "Severe Thinness"),
    ("bmiModerateThinness", "Moderate Thinness"),
    ("bmiMildThinness", "Mild Thinness"),
    ("bmiNormal", "Normal"),
    ("bmiOverweight", "Overweight"),
    ("bmiObeseClass1", "Obese Class I"),
    ("bmiObeseClass2", "Obese Class II"),
    ("bmiObeseClass3", "Obese Class III"),
    ("childBMIConsult", "Child BMI - consult pediatrician"),
    ("riskNutritionalDeficiencies", "Potential nutritional deficiencies"),
    ("riskWeakenedImmuneSystem", "Weakened immune system"),
    ("riskSevereHealthComplications", "Severe health complications"),
    ("riskIncreasedHeartDisease", "Increased risk of developing heart disease"),
    ("riskHigherType2Diabetes", "Higher risk of type 2 diabetes"),
    ("riskHighHeartDiseaseStroke", "High risk of heart disease and stroke"),
    ("riskHighType2Diabetes", "High risk of type 2 diabetes"),
    ("riskIncreasedCertainCancers", "Increased risk of certain cancers"),
    ("riskEarlyOnsetDiabetes", "Risk of early onset diabetes"),
    ("riskHigherFrailtyFalls", "Higher risk of frailty and falls"),
    ("riskPotentialReproductiveIssues", "Potential reproductive health issues"),
    ("errorWeight", "Please enter a valid weight."),
    ("errorHeight", "Please enter a valid height."),
    ("errorAge", "Please enter a valid age (2-120)."),
    ("errorMissingDataForPlan", "Cannot generate plan, missing input data. Enter weight, height and age first."),
    ("errorInvalidPlanData", "Invalid user data. Please check your inputs."),
    (
        "macroErrorProteinTooHigh",
        "Macro calculation error: Protein intake is too high for the estimated calorie goal. Please review inputs or consult a professional.",
    ),
    ("bmiResultLabel", "Your BMI is"),
    ("bmiCategoryLabel", "Category"),
    ("bmiRangeLabel", "Range"),
    ("healthConsiderations", "Health Considerations"),
    (
        "bmiDisclaimer",
        "Note: This is general guidance. Please consult a healthcare professional for personalized advice.",
    ),
    ("nutritionalPlanTitle", "Nutritional Plan Suggestion"),
    ("bmrLabel", "Basal metabolic rate"),
    ("tdeeLabel", "Total daily energy expenditure"),
    ("estimatedDailyCalories", "Estimated Daily Caloric Intake"),
    ("macronutrientDistribution", "Suggested Macronutrient Distribution (approximate grams)"),
    ("proteinLabel", "Protein"),
    ("carbsLabel", "Carbohydrates"),
    ("fatsLabel", "Fats"),
    (
        "planDisclaimer",
        "This is a general guideline. For a personalized plan, please consult a nutritionist or healthcare provider.",
    ),
    ("historyTitle", "BMI History"),
    ("historyEmpty", "No history yet."),
    ("historyCleared", "History cleared ({count} entries removed)."),
    ("dateLabel", "Date"),
    ("weightLabel", "Weight"),
    ("heightLabel", "Height"),
];
