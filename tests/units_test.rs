use bmiplan::core::units;
use bmiplan::models::measurement::{HeightUnit, WeightUnit};

#[test]
fn test_to_kg_from_kg() {
    assert!((units::to_kg(72.5, WeightUnit::Kg) - 72.5).abs() < 1e-9);
    assert!((units::to_kg(160.0, WeightUnit::Lb) - 72.57).abs() < 0.01);
    assert!((units::from_kg(72.5, WeightUnit::Lb) - 159.83).abs() < 0.01);
    assert!((units::from_kg(72.5, WeightUnit::Kg) - 72.5).abs() < 1e-9);
}

#[test]
fn test_to_cm_from_cm() {
    assert!((units::to_cm(70.0, HeightUnit::In) - 177.8).abs() < 1e-9);
    assert!((units::to_cm(180.0, HeightUnit::Cm) - 180.0).abs() < 1e-9);
    assert!((units::from_cm(254.0, HeightUnit::In) - 100.0).abs() < 1e-9);
}

#[test]
fn test_exact_factors() {
    assert_eq!(units::KG_TO_LB, 2.20462);
    assert_eq!(units::IN_TO_CM, 2.54);
    assert!((units::from_kg(1.0, WeightUnit::Lb) - 2.20462).abs() < 1e-12);
    assert!((units::to_cm(1.0, HeightUnit::In) - 2.54).abs() < 1e-12);
}

#[test]
fn test_toggle_weight_quantizes_to_one_decimal() {
    let (v, unit) = units::toggle_weight(70.0, WeightUnit::Kg);
    assert_eq!(unit, WeightUnit::Lb);
    assert!((v - 154.3).abs() < 1e-9);

    let (v, unit) = units::toggle_weight(154.3, WeightUnit::Lb);
    assert_eq!(unit, WeightUnit::Kg);
    assert!((v - 70.0).abs() < 1e-9);
}

#[test]
fn test_toggle_height_quantizes_to_one_decimal() {
    let (v, unit) = units::toggle_height(175.0, HeightUnit::Cm);
    assert_eq!(unit, HeightUnit::In);
    assert!((v - 68.9).abs() < 1e-9);

    let (v, unit) = units::toggle_height(68.9, HeightUnit::In);
    assert_eq!(unit, HeightUnit::Cm);
    assert!((v - 175.0).abs() < 1e-9);
}

#[test]
fn test_round_trip_within_rounding_tolerance() {
    for kg in [0.5, 45.0, 63.7, 70.0, 88.8, 123.4, 250.0] {
        let (lb, _) = units::toggle_weight(kg, WeightUnit::Kg);
        let (back, _) = units::toggle_weight(lb, WeightUnit::Lb);
        assert!((back - kg).abs() <= 0.1, "{} kg came back as {}", kg, back);
    }
    for cm in [50.0, 152.4, 175.0, 199.9] {
        let (inch, _) = units::toggle_height(cm, HeightUnit::Cm);
        let (back, _) = units::toggle_height(inch, HeightUnit::In);
        assert!((back - cm).abs() <= 0.2, "{} cm came back as {}", cm, back);
    }
}

#[test]
fn test_round1() {
    assert_eq!(units::round1(22.857), 22.9);
    assert_eq!(units::round1(15.57), 15.6);
    assert_eq!(units::round1(10.0), 10.0);
}
