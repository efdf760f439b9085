// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use dinefilter_app::{Category, Location, LocationId, Taxonomy, TaxonomyId};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The full 8-category sample document, embedded at compile time.
pub const SAMPLE_DATASET: &str = include_str!("../data/filters.json");

pub const DATASET_PATH_ENV: &str = "DINEFILTER_DATASET_PATH";

/// Load-time failures. The load is all-or-nothing: no partial category
/// list is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The document is not JSON or does not match the top-level shape.
    Format(String),
    /// A nested location entry is missing one of its required fields.
    MissingLocationField {
        category: String,
        index: usize,
        field: &'static str,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(detail) => write!(f, "dataset does not match expected shape: {detail}"),
            Self::MissingLocationField {
                category,
                index,
                field,
            } => write!(
                f,
                "location {index} in category {category:?} is missing required field {field:?}"
            ),
        }
    }
}

impl std::error::Error for DatasetError {}

// statusCode and message are part of the required envelope shape but
// their values are not interpreted.
#[derive(Debug, Deserialize)]
struct RawDocument {
    data: Vec<RawCategory>,
    #[serde(rename = "statusCode")]
    _status_code: i64,
    #[serde(rename = "message")]
    _message: String,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    name: String,
    slug: String,
    taxonomies: Vec<RawTaxonomy>,
}

#[derive(Debug, Deserialize)]
struct RawTaxonomy {
    id: Option<i64>,
    #[serde(rename = "Guid")]
    guid: Option<String>,
    slug: Option<String>,
    name: Option<String>,
    city: Option<String>,
    locations: Option<Vec<RawLocation>>,
}

// Location fields decode as optional so a missing one surfaces as a
// MissingLocationField with its position, not a bare serde error.
#[derive(Debug, Deserialize)]
struct RawLocation {
    id: Option<i64>,
    #[serde(rename = "Guid")]
    guid: Option<String>,
    slug: Option<String>,
    name: Option<String>,
}

/// Parse a raw dataset document into the typed category list,
/// preserving category and taxonomy order.
pub fn parse_dataset(raw: &str) -> Result<Vec<Category>, DatasetError> {
    let document: RawDocument =
        serde_json::from_str(raw).map_err(|error| DatasetError::Format(error.to_string()))?;
    document.data.into_iter().map(map_category).collect()
}

fn map_category(raw: RawCategory) -> Result<Category, DatasetError> {
    let RawCategory {
        name,
        slug,
        taxonomies,
    } = raw;
    let taxonomies = taxonomies
        .into_iter()
        .map(|taxonomy| map_taxonomy(&slug, taxonomy))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Category {
        name,
        slug,
        taxonomies,
    })
}

fn map_taxonomy(category_slug: &str, raw: RawTaxonomy) -> Result<Taxonomy, DatasetError> {
    let locations = match raw.locations {
        Some(entries) => Some(
            entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| map_location(category_slug, index, entry))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => None,
    };
    Ok(Taxonomy {
        id: raw.id.map(TaxonomyId::new),
        external_id: raw.guid,
        slug: raw.slug,
        name: raw.name,
        city: raw.city,
        locations,
    })
}

fn map_location(
    category_slug: &str,
    index: usize,
    raw: RawLocation,
) -> Result<Location, DatasetError> {
    let missing = |field| DatasetError::MissingLocationField {
        category: category_slug.to_owned(),
        index,
        field,
    };
    Ok(Location {
        id: LocationId::new(raw.id.ok_or_else(|| missing("id"))?),
        external_id: raw.guid.ok_or_else(|| missing("Guid"))?,
        slug: raw.slug.ok_or_else(|| missing("slug"))?,
        name: raw.name.ok_or_else(|| missing("name"))?,
    })
}

/// Where the dataset comes from: an explicit file, or the embedded
/// sample. Resolution order is config value, then the
/// `DINEFILTER_DATASET_PATH` env var, then the embedded sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Embedded,
    File(PathBuf),
}

impl DatasetSource {
    pub fn resolve(configured: Option<&Path>) -> Self {
        if let Some(path) = configured {
            return Self::File(path.to_owned());
        }
        if let Some(path) = env::var_os(DATASET_PATH_ENV) {
            return Self::File(PathBuf::from(path));
        }
        Self::Embedded
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "embedded sample dataset".to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }

    pub fn load(&self) -> Result<Vec<Category>> {
        match self {
            Self::Embedded => {
                parse_dataset(SAMPLE_DATASET).context("parse embedded sample dataset")
            }
            Self::File(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("read dataset file {}", path.display()))?;
                parse_dataset(&raw)
                    .with_context(|| format!("parse dataset file {}", path.display()))
            }
        }
    }
}
