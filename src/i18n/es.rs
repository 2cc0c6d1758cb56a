pub const ENTRIES: &[(&str, &str)] = &[
    ("bmiSevereThinness", "Delgadez Severa"),
    ("bmiModerateThinness", "Delgadez Moderada"),
    ("bmiMildThinness", "Delgadez Leve"),
    ("bmiNormal", "Normal"),
    ("bmiOverweight", "Sobrepeso"),
    ("bmiObeseClass1", "Obesidad Clase I"),
    ("bmiObeseClass2", "Obesidad Clase II"),
    ("bmiObeseClass3", "Obesidad Clase III"),
    ("childBMIConsult", "IMC Infantil - consulte a un pediatra"),
    ("riskNutritionalDeficiencies", "Posibles deficiencias nutricionales"),
    ("riskWeakenedImmuneSystem", "Sistema inmunológico debilitado"),
    ("riskSevereHealthComplications", "Complicaciones graves de salud"),
    ("riskIncreasedHeartDisease", "Mayor riesgo de enfermedades cardíacas"),
    ("riskHigherType2Diabetes", "Mayor riesgo de diabetes tipo 2"),
    (
        "riskHighHeartDiseaseStroke",
        "Alto riesgo de enfermedades cardíacas y accidente cerebrovascular",
    ),
    ("riskHighType2Diabetes", "Alto riesgo de diabetes tipo 2"),
    ("riskIncreasedCertainCancers", "Mayor riesgo de ciertos tipos de cáncer"),
    ("riskEarlyOnsetDiabetes", "Riesgo de diabetes de aparición temprana"),
    ("riskHigherFrailtyFalls", "Mayor riesgo de fragilidad y caídas"),
    ("riskPotentialReproductiveIssues", "Posibles problemas de salud reproductiva"),
    ("errorWeight", "Por favor, ingrese un peso válido."),
    ("errorHeight", "Por favor, ingrese una altura válida."),
    ("errorAge", "Por favor, ingrese una edad válida (2-120)."),
    ("errorMissingDataForPlan", "No se puede generar el plan, faltan datos de entrada."),
    ("errorInvalidPlanData", "Datos de usuario no válidos. Revise sus datos."),
    (
        "macroErrorProteinTooHigh",
        "Error en el cálculo de macros: La ingesta de proteínas es demasiado alta para el objetivo calórico estimado. Revise los datos o consulte a un profesional.",
    ),
    ("bmiResultLabel", "Su IMC es"),
    ("bmiCategoryLabel", "Categoría"),
    ("bmiRangeLabel", "Rango"),
    ("healthConsiderations", "Consideraciones de Salud"),
    (
        "bmiDisclaimer",
        "Nota: Esta es una guía general. Consulte a un profesional de la salud para obtener asesoramiento personalizado.",
    ),
    ("nutritionalPlanTitle", "Sugerencia de Plan Nutricional"),
    ("bmrLabel", "Tasa metabólica basal"),
    ("tdeeLabel", "Gasto energético diario total"),
    ("estimatedDailyCalories", "Ingesta Calórica Diaria Estimada"),
    ("macronutrientDistribution", "Distribución Sugerida de Macronutrientes (gramos aproximados)"),
    ("proteinLabel", "Proteína"),
    ("carbsLabel", "Carbohidratos"),
    ("fatsLabel", "Grasas"),
    (
        "planDisclaimer",
        "Esta es una guía general. Para un plan personalizado, consulte a un nutricionista o proveedor de atención médica.",
    ),
    ("historyTitle", "Historial de IMC"),
    ("historyEmpty", "Aún no hay historial."),
    ("historyCleared", "Historial borrado ({count} registros eliminados)."),
    ("dateLabel", "Fecha"),
    ("weightLabel", "Peso"),
    ("heightLabel", "Altura"),
];
