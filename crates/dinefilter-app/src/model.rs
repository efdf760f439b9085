// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::*;

/// Row label used when a taxonomy carries neither a name nor a city.
pub const NO_NAME_LABEL: &str = "(No name)";

/// One filter group (for example "Cuisines"). Built once at load time,
/// immutable afterwards. `taxonomies` keeps the source document order,
/// which is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    pub taxonomies: Vec<Taxonomy>,
}

/// One selectable option within a category.
///
/// Every field is optional because the dataset is heterogeneous: sort and
/// price entries carry only `name`/`slug`, most entries carry full
/// identifiers, and neighbourhood entries carry a `city` label plus
/// nested `locations` instead of a top-level name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub id: Option<TaxonomyId>,
    pub external_id: Option<String>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub locations: Option<Vec<Location>>,
}

impl Taxonomy {
    /// Label shown for this option: `name`, else `city`, else the
    /// placeholder.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.city.as_deref())
            .unwrap_or(NO_NAME_LABEL)
    }
}

/// A nested entry under certain taxonomies (a neighbourhood under a
/// city). All four fields are required; the loader rejects documents
/// where any is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub external_id: String,
    pub slug: String,
    pub name: String,
}
