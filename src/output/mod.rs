pub mod human;

use serde_json::{Value, json};

use crate::core::assess::Assessment;
use crate::i18n::Translate;
use crate::models::plan::NutritionPlan;

/// Standard JSON envelope.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    error_with_data(command, code, message, Value::Null)
}

/// Error envelope that still carries a payload, e.g. per-field flags.
pub fn error_with_data(command: &str, code: &str, message: &str, data: Value) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": data,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// JSON payload for an assessment, with tags resolved alongside.
pub fn assessment_json(a: &Assessment, tr: &dyn Translate) -> Value {
    let risks: Vec<Value> = a
        .risks
        .iter()
        .map(|r| json!({ "tag": r.tag(), "text": tr.translate(r.tag()) }))
        .collect();
    json!({
        "measurement": a.measurement,
        "bmi": {
            "value": a.bmi.value,
            "category": a.bmi.category,
            "color": a.bmi.color,
            "range": a.bmi.range,
            "child_advisory": a.bmi.child_advisory,
            "message": a.bmi.message(tr),
        },
        "risks": risks,
    })
}

/// JSON payload for a plan; the macro issue, if any, is resolved to text.
pub fn plan_json(plan: &NutritionPlan, tr: &dyn Translate) -> Value {
    let mut value = json!({ "plan": plan });
    if let Some(issue) = plan.macro_issue {
        value["macro_error"] = json!({ "tag": issue.tag(), "text": tr.translate(issue.tag()) });
    }
    value
}
