//! Location matching - ranking catalog entries against an item keyword

use crate::catalog::Catalog;
use crate::types::MatchResult;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// Matches item keywords against an injected location catalog
pub struct SpotMatcher {
    catalog: Catalog,
}

impl SpotMatcher {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Match `item` against the catalog, ranking the user's area first.
    ///
    /// Always returns at least one record: a keyword with no tag overlap
    /// gets the catch-all fallback, and a panic while ranking degrades to a
    /// generic error record instead of crossing the boundary.
    pub fn match_spots(&self, item: &str, user_area: &str) -> Vec<MatchResult> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.rank(item, user_area))) {
            Ok(results) => results,
            Err(_) => {
                error!(item = %item, area = %user_area, "match ranking panicked");
                vec![degraded_result()]
            }
        }
    }

    fn rank(&self, item: &str, user_area: &str) -> Vec<MatchResult> {
        // The extractor already lowercases; other callers may not.
        let item = item.to_lowercase();

        // Symmetric substring containment: "phones" hits the tag "phone",
        // and "pho" hits both. The empty keyword is contained in every tag
        // and matches the whole catalog.
        let mut matches: Vec<MatchResult> = self
            .catalog
            .entries()
            .iter()
            .filter(|entry| {
                entry
                    .tags
                    .iter()
                    .any(|tag| item.contains(tag.as_str()) || tag.contains(&item))
            })
            .map(MatchResult::from_entry)
            .collect();

        if matches.is_empty() {
            return vec![fallback_result()];
        }

        // Stable sort on a single key: locations in the user's area first,
        // catalog order preserved within each group.
        matches.sort_by_key(|m| m.area != user_area);
        matches
    }
}

/// Catch-all record returned when no catalog entry matches.
fn fallback_result() -> MatchResult {
    MatchResult {
        name: "Check UAPD Lost & Found".to_string(),
        link: "https://uapd.arizona.edu/lost-and-found".to_string(),
        area: "Central Campus".to_string(),
        note: Some(
            "No exact matches found, but UAPD handles all types of lost items.".to_string(),
        ),
    }
}

/// Generic record substituted when ranking itself fails.
fn degraded_result() -> MatchResult {
    MatchResult {
        name: "Error processing request".to_string(),
        link: String::new(),
        area: String::new(),
        note: None,
    }
}
