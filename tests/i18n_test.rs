use bmiplan::i18n::{Catalog, Locale, Translate};
use bmiplan::models::{BmiCategory, HealthRisk};

const ALL_CATEGORIES: [BmiCategory; 8] = [
    BmiCategory::SevereThinness,
    BmiCategory::ModerateThinness,
    BmiCategory::MildThinness,
    BmiCategory::Normal,
    BmiCategory::Overweight,
    BmiCategory::ObeseClass1,
    BmiCategory::ObeseClass2,
    BmiCategory::ObeseClass3,
];

#[test]
fn test_english_lookup() {
    let tr = Catalog::new(Locale::En);
    assert_eq!(tr.translate("bmiNormal"), "Normal");
    assert_eq!(tr.translate("errorWeight"), "Please enter a valid weight.");
    assert_eq!(tr.translate("childBMIConsult"), "Child BMI - consult pediatrician");
}

#[test]
fn test_unknown_key_falls_back_to_key() {
    for locale in [Locale::En, Locale::Es, Locale::Pt] {
        let tr = Catalog::new(locale);
        assert_eq!(tr.translate("noSuchTag"), "noSuchTag");
    }
}

#[test]
fn test_spanish_and_portuguese_differ_from_english() {
    let en = Catalog::new(Locale::En);
    let es = Catalog::new(Locale::Es);
    let pt = Catalog::new(Locale::Pt);
    assert_eq!(es.translate("bmiSevereThinness"), "Delgadez Severa");
    assert_ne!(es.translate("errorWeight"), en.translate("errorWeight"));
    assert_ne!(pt.translate("errorWeight"), en.translate("errorWeight"));
    assert_eq!(es.locale(), Locale::Es);
}

#[test]
fn test_every_emitted_tag_is_translated() {
    for locale in [Locale::En, Locale::Es, Locale::Pt] {
        let tr = Catalog::new(locale);
        for c in ALL_CATEGORIES {
            assert_ne!(tr.translate(c.tag()), c.tag(), "{locale}: {}", c.tag());
        }
        let risks = bmiplan::core::risk::assess(45.0, Some(10), None)
            .into_iter()
            .chain(bmiplan::core::risk::assess(16.0, Some(70), Some(bmiplan::models::Gender::Female)));
        for r in risks {
            assert_ne!(tr.translate(r.tag()), r.tag(), "{locale}: {}", r.tag());
        }
        for tag in ["errorWeight", "errorHeight", "errorAge", "macroErrorProteinTooHigh"] {
            assert_ne!(tr.translate(tag), tag);
        }
    }
}

#[test]
fn test_translate_with_substitutes_params() {
    let tr = Catalog::new(Locale::En);
    assert_eq!(
        tr.translate_with("historyCleared", &[("count", "3")]),
        "History cleared (3 entries removed)."
    );
    let es = Catalog::new(Locale::Es);
    assert!(es.translate_with("historyCleared", &[("count", "7")]).contains('7'));
}

#[test]
fn test_custom_translator() {
    struct Shouty;
    impl Translate for Shouty {
        fn translate(&self, key: &str) -> String {
            key.to_uppercase()
        }
    }
    assert_eq!(Shouty.translate(HealthRisk::EarlyOnsetDiabetes.tag()), "RISKEARLYONSETDIABETES");
}

#[test]
fn test_locale_parse_and_display() {
    assert_eq!("pt".parse::<Locale>().unwrap(), Locale::Pt);
    assert!("fr".parse::<Locale>().is_err());
    assert_eq!(Locale::Es.to_string(), "es");
    assert_eq!(Locale::default(), Locale::En);
}
