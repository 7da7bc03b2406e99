use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Embedded at compile time so the lookup layer has no runtime IO.
const REGIONS_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/regions.json"));
const CONSTITUENCIES_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/constituencies.json"));
const AMBIGUOUS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/ambiguous-constituencies.json"
));

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("reference table '{table}' failed to parse: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// One of the eight electoral regions. `active_until` is present only for
/// regions retired by a boundary review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub name: String,
    pub region_id: u32,
    #[serde(default)]
    pub active_until: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituencyRecord {
    pub name: String,
    pub constituency_id: u32,
}

/// A spoken name that maps to more than one constituency, e.g. "Dundee"
/// covering Dundee City East and Dundee City West.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguousEntry {
    pub name: String,
    pub matches: Vec<String>,
}

/// Lower-case and strip all whitespace. Lookups are exact over this form,
/// no fuzzy matching.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read-only lookup tables for regions, constituencies and ambiguous spoken
/// names. Built once from the embedded JSON; all lookups are pure.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    regions: Vec<RegionRecord>,
    region_index: HashMap<String, usize>,
    constituencies: HashMap<String, ConstituencyRecord>,
    ambiguous: HashMap<String, AmbiguousEntry>,
}

impl ReferenceTables {
    pub fn load() -> Result<Self, ReferenceError> {
        let regions: Vec<RegionRecord> =
            serde_json::from_str(REGIONS_JSON).map_err(|source| ReferenceError::Parse {
                table: "regions",
                source,
            })?;
        let constituency_records: Vec<ConstituencyRecord> = serde_json::from_str(
            CONSTITUENCIES_JSON,
        )
        .map_err(|source| ReferenceError::Parse {
            table: "constituencies",
            source,
        })?;
        let ambiguous_entries: Vec<AmbiguousEntry> =
            serde_json::from_str(AMBIGUOUS_JSON).map_err(|source| ReferenceError::Parse {
                table: "ambiguous-constituencies",
                source,
            })?;

        let region_index = regions
            .iter()
            .enumerate()
            .map(|(i, r)| (normalize(&r.name), i))
            .collect();
        let constituencies = constituency_records
            .into_iter()
            .map(|c| (normalize(&c.name), c))
            .collect();
        let ambiguous = ambiguous_entries
            .into_iter()
            .map(|a| (normalize(&a.name), a))
            .collect();

        Ok(Self {
            regions,
            region_index,
            constituencies,
            ambiguous,
        })
    }

    pub fn region(&self, name: &str) -> Option<&RegionRecord> {
        self.region_index
            .get(&normalize(name))
            .map(|&i| &self.regions[i])
    }

    pub fn constituency(&self, name: &str) -> Option<&ConstituencyRecord> {
        self.constituencies.get(&normalize(name))
    }

    pub fn ambiguous_constituency(&self, name: &str) -> Option<&AmbiguousEntry> {
        self.ambiguous.get(&normalize(name))
    }

    /// Region display names in table order, for the ListRegions intent.
    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }
}
