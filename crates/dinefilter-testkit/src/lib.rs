// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Deterministic raw-dataset fixtures for loader and render tests.
//!
//! Documents are built as `serde_json::Value` trees in the exact wire
//! shape the loader consumes (`data` / `statusCode` / `message`,
//! `Guid`-spelled identifiers), then serialized on demand.

use serde_json::{Value, json};

pub const LOCATION_FIELDS: [&str; 4] = ["id", "Guid", "slug", "name"];

/// Deterministic GUID-shaped identifier derived from a counter.
pub fn guid(n: u64) -> String {
    format!("{n:08X}-0000-4000-8000-{n:012X}")
}

#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    categories: Vec<Value>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, name: &str, slug: &str, taxonomies: Vec<Value>) -> Self {
        self.categories.push(json!({
            "name": name,
            "slug": slug,
            "taxonomies": taxonomies,
        }));
        self
    }

    pub fn build(&self) -> Value {
        json!({
            "data": self.categories,
            "statusCode": 200,
            "message": "success",
        })
    }

    pub fn to_json(&self) -> String {
        self.build().to_string()
    }
}

/// Fully identified taxonomy entry, the common case.
pub fn named_taxonomy(id: i64, slug: &str, name: &str) -> Value {
    json!({
        "id": id,
        "Guid": guid(id as u64),
        "slug": slug,
        "name": name,
    })
}

/// Entry carrying only `name`/`slug`, as in sort and price categories.
pub fn plain_taxonomy(slug: &str, name: &str) -> Value {
    json!({
        "name": name,
        "slug": slug,
    })
}

/// Identified entry with no display name at all.
pub fn unnamed_taxonomy(id: i64, slug: &str) -> Value {
    json!({
        "id": id,
        "Guid": guid(id as u64),
        "slug": slug,
    })
}

/// Neighbourhood-style entry: a city label plus nested locations, no
/// top-level name.
pub fn city_taxonomy(city: &str, locations: Vec<Value>) -> Value {
    json!({
        "city": city,
        "locations": locations,
    })
}

pub fn location(id: i64, slug: &str, name: &str) -> Value {
    json!({
        "id": id,
        "Guid": guid(id as u64),
        "slug": slug,
        "name": name,
    })
}

/// A location with one required field removed, for failure-path tests.
pub fn location_without(field: &str, id: i64, slug: &str, name: &str) -> Value {
    let mut entry = location(id, slug, name);
    entry
        .as_object_mut()
        .expect("location fixture is an object")
        .remove(field);
    entry
}

/// Two-category document used by render tests: a cuisine trio and the
/// four dress codes.
pub fn two_category_document() -> String {
    DatasetBuilder::new()
        .category(
            "Cuisines",
            "cuisine",
            vec![
                named_taxonomy(80, "international", "International"),
                named_taxonomy(82, "italian", "Italian"),
                named_taxonomy(70, "contemporary-1", "Contemporary"),
            ],
        )
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
        .to_json()
}
