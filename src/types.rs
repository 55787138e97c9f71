//! Core data types for lost-and-found matching

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Campus area a location belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "Central Campus")]
    CentralCampus,
    #[serde(rename = "Library Area")]
    LibraryArea,
    #[serde(rename = "South Campus")]
    SouthCampus,
    #[serde(rename = "East Campus")]
    EastCampus,
}

impl Area {
    pub fn label(&self) -> &'static str {
        match self {
            Area::CentralCampus => "Central Campus",
            Area::LibraryArea => "Library Area",
            Area::SouthCampus => "South Campus",
            Area::EastCampus => "East Campus",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A staffed lost-and-found location with the item categories it handles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub tags: AHashSet<String>,
    pub link: String,
    pub area: Area,
}

impl CatalogEntry {
    /// Tags are normalized to lowercase; matching is case-insensitive throughout.
    pub fn new(name: &str, tags: &[&str], link: &str, area: Area) -> Self {
        Self {
            name: name.to_string(),
            tags: tags.iter().map(|t| t.to_lowercase()).collect(),
            link: link.to_string(),
            area,
        }
    }
}

/// A location recommendation returned to the caller
///
/// `note` is only populated on the catch-all fallback record, so its
/// presence tells API consumers the match was an apology rather than a
/// tag hit. It is omitted from the wire format when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub link: String,
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MatchResult {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            link: entry.link.clone(),
            area: entry.area.label().to_string(),
            note: None,
        }
    }
}
