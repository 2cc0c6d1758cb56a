pub const ENTRIES: &[(&str, &str)] = &[
    ("bmiSevereThinness", "Magreza Grave"),
    ("bmiModerateThinness", "Magreza Moderada"),
    ("bmiMildThinness", "Magreza Leve"),
    ("bmiNormal", "Normal"),
    ("bmiOverweight", "Sobrepeso"),
    ("bmiObeseClass1", "Obesidade Classe I"),
    ("bmiObeseClass2", "Obesidade Classe II"),
    ("bmiObeseClass3", "Obesidade Classe III"),
    ("childBMIConsult", "IMC Infantil - consulte um pediatra"),
    ("riskNutritionalDeficiencies", "Potenciais deficiências nutricionais"),
    ("riskWeakenedImmuneSystem", "Sistema imunológico enfraquecido"),
    ("riskSevereHealthComplications", "Complicações graves de saúde"),
    ("riskIncreasedHeartDisease", "Risco aumentado de doenças cardíacas"),
    ("riskHigherType2Diabetes", "Risco aumentado de diabetes tipo 2"),
    ("riskHighHeartDiseaseStroke", "Alto risco de doenças cardíacas e derrame"),
    ("riskHighType2Diabetes", "Alto risco de diabetes tipo 2"),
    ("riskIncreasedCertainCancers", "Risco aumentado de certos tipos de câncer"),
    ("riskEarlyOnsetDiabetes", "Risco de diabetes de início precoce"),
    ("riskHigherFrailtyFalls", "Maior risco de fragilidade e quedas"),
    ("riskPotentialReproductiveIssues", "Potenciais problemas de saúde reprodutiva"),
    ("errorWeight", "Por favor, insira um peso válido."),
    ("errorHeight", "Por favor, insira uma altura válida."),
    ("errorAge", "Por favor, insira uma idade válida (2-120)."),
    ("errorMissingDataForPlan", "Não é possível gerar o plano, dados de entrada ausentes."),
    ("errorInvalidPlanData", "Dados de usuário inválidos. Verifique suas entradas."),
    (
        "macroErrorProteinTooHigh",
        "Erro no cálculo de macros: A ingestão de proteína é muito alta para o objetivo calórico estimado. Revise os dados ou consulte um profissional.",
    ),
    ("bmiResultLabel", "Seu IMC é"),
    ("bmiCategoryLabel", "Categoria"),
    ("bmiRangeLabel", "Faixa"),
    ("healthConsiderations", "Considerações de Saúde"),
    (
        "bmiDisclaimer",
        "Nota: Esta é uma orientação geral. Consulte um profissional de saúde para aconselhamento personalizado.",
    ),
    ("nutritionalPlanTitle", "Sugestão de Plano Nutricional"),
    ("bmrLabel", "Taxa metabólica basal"),
    ("tdeeLabel", "Gasto energético diário total"),
    ("estimatedDailyCalories", "Ingestão Calórica Diária Estimada"),
    ("macronutrientDistribution", "Distribuição Sugerida de Macronutrientes (gramas aproximadas)"),
    ("proteinLabel", "Proteína"),
    ("carbsLabel", "Carboidratos"),
    ("fatsLabel", "Gorduras"),
    (
        "planDisclaimer",
        "Esta é uma orientação geral. Para um plano personalizado, consulte um nutricionista ou profissional de saúde.",
    ),
    ("historyTitle", "Histórico de IMC"),
    ("historyEmpty", "Nenhum histórico ainda."),
    ("historyCleared", "Histórico apagado ({count} registros removidos)."),
    ("dateLabel", "Data"),
    ("weightLabel", "Peso"),
    ("heightLabel", "Altura"),
];
