// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use dinefilter_data::{DatasetError, DatasetSource, parse_dataset};
use dinefilter_testkit::{
    DatasetBuilder, LOCATION_FIELDS, city_taxonomy, location, location_without, named_taxonomy,
    plain_taxonomy, unnamed_taxonomy,
};
use std::fs;

#[test]
fn load_preserves_category_count_and_order() {
    let raw = DatasetBuilder::new()
        .category("Cuisines", "cuisine", vec![named_taxonomy(82, "italian", "Italian")])
        .category("Meal Periods", "mealperiod", vec![])
        .category("Price Ranges", "pricerange", vec![plain_taxonomy("low", "Low")])
        .to_json();

    let categories = parse_dataset(&raw).expect("well-formed document parses");
    let names = categories
        .iter()
        .map(|category| category.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Cuisines", "Meal Periods", "Price Ranges"]);
}

#[test]
fn taxonomy_order_within_a_category_is_preserved() {
    let raw = DatasetBuilder::new()
        .category(
            "Dress Codes",
            "attire",
            vec![
                named_taxonomy(373, "casual-1", "Casual"),
                named_taxonomy(379, "smart-casual-1", "Smart Casual"),
                named_taxonomy(371, "beachwear", "Beachwear"),
                named_taxonomy(376, "formal", "Formal"),
            ],
        )
        .to_json();

    let categories = parse_dataset(&raw).expect("well-formed document parses");
    let names = categories[0]
        .taxonomies
        .iter()
        .map(|taxonomy| taxonomy.display_name())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Casual", "Smart Casual", "Beachwear", "Formal"]);
}

#[test]
fn missing_optional_taxonomy_fields_are_not_errors() {
    let raw = DatasetBuilder::new()
        .category(
            "Sort by",
            "sort",
            vec![plain_taxonomy("nearest_to_me", "Nearest to Me"), unnamed_taxonomy(7, "mystery")],
        )
        .to_json();

    let categories = parse_dataset(&raw).expect("optional fields may be absent");
    let sort = &categories[0];
    assert_eq!(sort.taxonomies[0].id, None);
    assert_eq!(sort.taxonomies[0].display_name(), "Nearest to Me");
    assert_eq!(sort.taxonomies[1].name, None);
    assert_eq!(sort.taxonomies[1].display_name(), "(No name)");
}

#[test]
fn each_missing_location_field_fails_the_whole_load() {
    for field in LOCATION_FIELDS {
        let raw = DatasetBuilder::new()
            .category("Cuisines", "cuisine", vec![named_taxonomy(82, "italian", "Italian")])
            .category(
                "Neighbourhoods",
                "location",
                vec![city_taxonomy(
                    "Dubai",
                    vec![
                        location(464, "al-barsha", "Al Barsha"),
                        location_without(field, 417, "dubai-marina", "Dubai Marina"),
                    ],
                )],
            )
            .to_json();

        let error = parse_dataset(&raw).expect_err("missing location field should fail");
        assert_eq!(
            error,
            DatasetError::MissingLocationField {
                category: "location".to_owned(),
                index: 1,
                field,
            },
            "field {field}",
        );
    }
}

#[test]
fn non_json_input_is_a_format_error() {
    let error = parse_dataset("{{not json").expect_err("non-JSON should fail");
    assert!(matches!(error, DatasetError::Format(_)));
}

#[test]
fn missing_data_array_is_a_format_error() {
    let error = parse_dataset(r#"{"statusCode": 200, "message": "success"}"#)
        .expect_err("missing data should fail");
    assert!(matches!(error, DatasetError::Format(_)));
    assert!(error.to_string().contains("expected shape"));
}

#[test]
fn mistyped_data_field_is_a_format_error() {
    let error = parse_dataset(r#"{"data": "nope", "statusCode": 200, "message": "success"}"#)
        .expect_err("mistyped data should fail");
    assert!(matches!(error, DatasetError::Format(_)));
}

#[test]
fn missing_envelope_fields_are_format_errors() {
    let error =
        parse_dataset(r#"{"data": []}"#).expect_err("missing statusCode/message should fail");
    assert!(matches!(error, DatasetError::Format(_)));
}

#[test]
fn file_source_round_trips_a_fixture() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("filters.json");
    fs::write(
        &path,
        DatasetBuilder::new()
            .category("Cuisines", "cuisine", vec![named_taxonomy(82, "italian", "Italian")])
            .to_json(),
    )?;

    let categories = DatasetSource::File(path.clone()).load()?;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].taxonomies[0].display_name(), "Italian");
    assert_eq!(DatasetSource::File(path.clone()).describe(), path.display().to_string());
    Ok(())
}

#[test]
fn file_source_reports_missing_file_with_path() {
    let error = DatasetSource::File("/no/such/filters.json".into())
        .load()
        .expect_err("missing file should fail");
    assert!(format!("{error:#}").contains("/no/such/filters.json"));
}

#[test]
fn file_source_reports_parse_failures_with_path() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{{not json")?;

    let error = DatasetSource::File(path.clone())
        .load()
        .expect_err("broken file should fail");
    assert!(format!("{error:#}").contains("broken.json"));
    Ok(())
}
