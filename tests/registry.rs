use unit_converter::conversion::ConversionError;
use unit_converter::quantity::Category;
use unit_converter::registry::{base_unit, contains, factor_for, factor_table, unit_names};

#[test]
fn unit_lists_follow_display_order() {
    assert_eq!(
        unit_names(Category::Length),
        [
            "inches",
            "feet",
            "yards",
            "miles",
            "millimeters",
            "centimeters",
            "meters",
            "kilometers"
        ]
    );
    assert_eq!(unit_names(Category::Temperature), ["celsius", "fahrenheit", "kelvin"]);
    assert_eq!(unit_names(Category::Weight), ["ounces", "pounds", "grams", "kilograms"]);
    assert_eq!(unit_names(Category::Volume).len(), 9);
    assert_eq!(unit_names(Category::Volume)[2], "fluid ounces");
    assert_eq!(unit_names(Category::Time).len(), 5);
    assert_eq!(unit_names(Category::Speed)[0], "meters per second");
}

#[test]
fn every_category_has_units() {
    for category in Category::ALL {
        assert!(!unit_names(category).is_empty(), "{category}");
    }
}

#[test]
fn exactly_one_base_unit_per_linear_category() {
    for category in Category::ALL.into_iter().filter(|c| c.is_linear()) {
        let table = factor_table(category).expect("linear table");
        let bases: Vec<_> = table.iter().filter(|(_, f)| *f == 1.0).collect();
        assert_eq!(bases.len(), 1, "{category} bases {bases:?}");
        assert_eq!(base_unit(category), Some(bases[0].0));
        assert!(table.iter().all(|(_, f)| f.is_finite() && *f > 0.0));
    }
    assert_eq!(base_unit(Category::Temperature), Some("celsius"));
}

#[test]
fn factor_table_matches_name_list() {
    for category in Category::ALL.into_iter().filter(|c| c.is_linear()) {
        let table = factor_table(category).expect("linear table");
        let names: Vec<_> = table.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, unit_names(category));
        for (name, factor) in table {
            assert_eq!(factor_for(category, name).unwrap(), factor);
        }
    }
}

#[test]
fn factor_lookup_errors() {
    assert_eq!(factor_for(Category::Length, "miles").unwrap(), 63360.0);
    assert_eq!(factor_for(Category::Speed, "knots").unwrap(), 0.514444);
    assert!(matches!(
        factor_for(Category::Length, "parsecs"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert_eq!(
        factor_for(Category::Temperature, "celsius"),
        Err(ConversionError::NotLinear(Category::Temperature))
    );
    assert!(factor_table(Category::Temperature).is_none());
}

#[test]
fn membership() {
    assert!(contains(Category::Volume, "fluid ounces"));
    assert!(contains(Category::Temperature, "Kelvin"));
    assert!(!contains(Category::Temperature, "rankine"));
    assert!(!contains(Category::Time, "meters"));
}

#[test]
fn category_names_round_trip() {
    for category in Category::ALL {
        assert_eq!(category.name().parse::<Category>().unwrap(), category);
        let (from, to) = category.default_units();
        assert!(contains(category, from) && contains(category, to));
    }
    assert_eq!("distance".parse::<Category>().unwrap(), Category::Length);
    assert_eq!(Category::Length.label(), "Distance");
    assert!("mass".parse::<Category>().is_err());
}
