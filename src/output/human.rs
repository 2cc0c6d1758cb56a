use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::core::assess::Assessment;
use crate::core::bmi::category_message;
use crate::core::units;
use crate::i18n::Translate;
use crate::models::history::HistoryEntry;
use crate::models::measurement::UnitPreference;
use crate::models::plan::NutritionPlan;

/// Paint text with a `#RRGGBB` color token. Malformed tokens leave it plain.
pub fn paint(text: &str, token: &str) -> ColoredString {
    match parse_hex(token) {
        Some((r, g, b)) => text.truecolor(r, g, b).bold(),
        None => text.normal(),
    }
}

fn parse_hex(token: &str) -> Option<(u8, u8, u8)> {
    let hex = token.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

/// Pretty-print a BMI assessment with its risk notes.
pub fn format_assessment(a: &Assessment, tr: &dyn Translate) -> String {
    let message = a.bmi.message(tr);
    let mut out = format!("{}: {:.1}\n", tr.translate("bmiResultLabel"), a.bmi.value);
    out.push_str(&format!(
        "{}: {}\n",
        tr.translate("bmiCategoryLabel"),
        paint(&message, &a.bmi.color)
    ));
    out.push_str(&format!("{}: {}\n", tr.translate("bmiRangeLabel"), a.bmi.range));

    if !a.risks.is_empty() {
        out.push_str(&format!("\n{}:\n", tr.translate("healthConsiderations")));
        for r in &a.risks {
            out.push_str(&format!("  - {}\n", tr.translate(r.tag())));
        }
    }
    out.push_str(&format!("\n{}", tr.translate("bmiDisclaimer")));
    out
}

/// Pretty-print a nutrition plan. Values are rounded to whole units.
pub fn format_plan(plan: &NutritionPlan, tr: &dyn Translate) -> String {
    let mut out = format!("=== {} ===\n", tr.translate("nutritionalPlanTitle"));
    out.push_str(&format!("{}: {:.0} kcal\n", tr.translate("bmrLabel"), plan.bmr));
    out.push_str(&format!("{}: {:.0} kcal\n", tr.translate("tdeeLabel"), plan.tdee));
    out.push_str(&format!(
        "{}: {} kcal\n",
        tr.translate("estimatedDailyCalories"),
        format!("{:.0}", plan.calories).bold()
    ));
    out.push_str(&format!("\n{}:\n", tr.translate("macronutrientDistribution")));

    out.push_str(&format!("  {}: ~{:.0}g\n", tr.translate("proteinLabel"), plan.protein_g));
    if plan.macro_issue.is_none() {
        out.push_str(&format!("  {}: ~{:.0}g\n", tr.translate("carbsLabel"), plan.carbs_g));
    }
    out.push_str(&format!("  {}: ~{:.0}g\n", tr.translate("fatsLabel"), plan.fat_g));
    if let Some(issue) = plan.macro_issue {
        out.push_str(&format!("  {}\n", tr.translate(issue.tag()).red()));
    }
    out.push_str(&format!("\n{}", tr.translate("planDisclaimer")));
    out
}

/// Render history as a table, weights and heights in the preferred units.
pub fn format_history(entries: &[HistoryEntry], prefs: &UnitPreference, tr: &dyn Translate) -> String {
    if entries.is_empty() {
        return tr.translate("historyEmpty");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            tr.translate("dateLabel"),
            format!("{} ({})", tr.translate("weightLabel"), prefs.weight),
            format!("{} ({})", tr.translate("heightLabel"), prefs.height),
            "BMI".to_string(),
            tr.translate("bmiCategoryLabel"),
        ]);

    for e in entries {
        table.add_row(vec![
            e.date.clone(),
            format!("{:.1}", units::from_kg(e.weight, prefs.weight)),
            format!("{:.1}", units::from_cm(e.height, prefs.height)),
            format!("{:.1}", e.bmi),
            category_message(e.category, e.child_advisory, tr),
        ]);
    }

    format!("{}\n{}", tr.translate("historyTitle"), table)
}
