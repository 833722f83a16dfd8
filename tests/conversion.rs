//! 카테고리별 변환 회귀 테스트.
use approx::assert_relative_eq;
use unit_converter::conversion::{convert, convert_named, ConversionError, UnitPair};
use unit_converter::quantity::Category;
use unit_converter::registry;
use unit_converter::service::ErrorCode;
use unit_converter::units::{LengthUnit, TemperatureUnit};

const SAMPLES: [f64; 6] = [0.0, 1.0, -3.5, 42.125, 1.0e-6, 98_765.4321];

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected} got {actual} (diff {diff}, tol {tol})"
    );
}

#[test]
fn known_values() {
    assert_eq!(convert(Category::Length, 1.0, "miles", "feet").unwrap(), 5280.0);
    assert_eq!(convert(Category::Volume, 1.0, "gallons", "cups").unwrap(), 16.0);
    assert_eq!(
        convert(Category::Temperature, 100.0, "celsius", "fahrenheit").unwrap(),
        212.0
    );
    assert_eq!(
        convert(Category::Temperature, 0.0, "celsius", "kelvin").unwrap(),
        273.15
    );
    assert_eq!(
        convert(Category::Temperature, 32.0, "fahrenheit", "celsius").unwrap(),
        0.0
    );
    assert_relative_eq!(
        convert(Category::Weight, 1.0, "pounds", "grams").unwrap(),
        453.5918807,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        convert(Category::Speed, 1.0, "knots", "meters per second").unwrap(),
        0.514444,
        max_relative = 1e-12
    );
    assert_eq!(convert(Category::Time, 2.0, "hours", "minutes").unwrap(), 120.0);
}

#[test]
fn identity_is_exact_for_every_unit() {
    for category in Category::ALL {
        for unit in registry::unit_names(category) {
            for v in SAMPLES {
                let out = convert(category, v, unit, unit).unwrap();
                assert_eq!(out, v, "{category} {unit} {v}");
            }
        }
    }
}

#[test]
fn identity_holds_for_awkward_values() {
    // 같은 단위는 배율을 곱했다 나누지 않으므로 반올림 오차가 없다
    let v = 0.1 + 0.2;
    assert_eq!(convert(Category::Volume, v, "teaspoons", "teaspoons").unwrap(), v);
    assert_eq!(convert(Category::Temperature, v, "fahrenheit", "fahrenheit").unwrap(), v);
}

#[test]
fn round_trip_every_pair() {
    for category in Category::ALL {
        let names = registry::unit_names(category);
        for a in &names {
            for b in &names {
                for v in SAMPLES {
                    let there = convert(category, v, a, b).unwrap();
                    let back = convert(category, there, b, a).unwrap();
                    if category.is_linear() {
                        let tol = 1e-9 * v.abs();
                        assert_close(&format!("{category} {a}->{b}"), back, v, tol);
                    } else {
                        assert_close(&format!("{category} {a}->{b}"), back, v, 1e-9);
                    }
                }
            }
        }
    }
}

#[test]
fn zero_is_preserved_by_linear_categories() {
    for category in Category::ALL.into_iter().filter(|c| c.is_linear()) {
        let names = registry::unit_names(category);
        for a in &names {
            for b in &names {
                assert_eq!(convert(category, 0.0, a, b).unwrap(), 0.0, "{category} {a}->{b}");
            }
        }
    }
}

#[test]
fn negative_values_pass_through() {
    assert_eq!(convert(Category::Length, -1.0, "miles", "feet").unwrap(), -5280.0);
    // -5 K는 물리적으로 불가능하지만 거르지 않는다
    assert_close(
        "kelvin",
        convert(Category::Temperature, -5.0, "kelvin", "celsius").unwrap(),
        -278.15,
        1e-9,
    );
}

#[test]
fn non_finite_input_propagates() {
    let nan = convert(Category::Length, f64::NAN, "meters", "feet").unwrap();
    assert!(nan.is_nan());
    let inf = convert(Category::Temperature, f64::INFINITY, "celsius", "kelvin").unwrap();
    assert_eq!(inf, f64::INFINITY);
}

#[test]
fn unknown_unit_is_rejected() {
    let err = convert(Category::Length, 1.0, "inches", "parsecs").unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownUnit {
            category: Category::Length,
            unit: "parsecs".to_string(),
        }
    );
    assert_eq!(ErrorCode::from(&err), ErrorCode::UnknownUnit);

    // 다른 카테고리의 단위도 알 수 없는 단위이다
    let err = convert(Category::Weight, 1.0, "meters", "grams").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit { .. }));
    let err = convert(Category::Temperature, 1.0, "celsius", "rankine").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit { .. }));
}

#[test]
fn unknown_category_is_rejected() {
    let err = convert_named("mass", 1.0, "a", "b").unwrap_err();
    assert_eq!(err, ConversionError::UnknownCategory("mass".to_string()));
    assert_eq!(ErrorCode::from(&err), ErrorCode::UnknownCategory);
}

#[test]
fn named_dispatch_accepts_labels_and_case() {
    assert_eq!(convert_named("Distance", 1.0, "Miles", "FEET").unwrap(), 5280.0);
    assert_eq!(
        convert_named("speed", 3.0, " meters per second ", "meters per second").unwrap(),
        3.0
    );
}

#[test]
fn unit_pair_swaps_and_converts() {
    let pair = UnitPair::parse(Category::Length, "miles", "feet").unwrap();
    assert_eq!(pair, UnitPair::Length(LengthUnit::Miles, LengthUnit::Feet));
    assert_eq!(pair.category(), Category::Length);
    assert_eq!(pair.convert(1.0), 5280.0);

    let back = pair.swapped();
    assert_eq!(back.names(), ("feet", "miles"));
    assert_eq!(back.convert(5280.0), 1.0);

    let temp = UnitPair::Temperature(TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    assert_eq!(temp.swapped().convert(212.0), 100.0);
}

#[test]
fn registry_only_errors_map_to_invalid_request() {
    let err = ConversionError::NotLinear(Category::Temperature);
    assert_eq!(ErrorCode::from(&err), ErrorCode::InvalidRequest);
}
