//! The lost-and-found location directory
//!
//! Loaded once at startup and shared read-only for the process lifetime;
//! declaration order is the final ranking tie-break and must be preserved.

use crate::types::{Area, CatalogEntry};
use ahash::AHashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate location name: {0}")]
    DuplicateName(String),
    #[error("location {0} has no tags")]
    EmptyTags(String),
}

/// Ordered, immutable collection of lost-and-found locations
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate and freeze a set of entries.
    ///
    /// Every entry must carry at least one tag and location names must be
    /// unique, since results are identified by name alone.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen: AHashSet<&str> = AHashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.tags.is_empty() {
                return Err(CatalogError::EmptyTags(entry.name.clone()));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in campus directory.
    pub fn builtin() -> Self {
        let entries = vec![
            CatalogEntry::new(
                "Student Union Info Desk",
                &["bags", "phones", "keys", "electronics", "backpack"],
                "https://studentunion.arizona.edu",
                Area::CentralCampus,
            ),
            CatalogEntry::new(
                "UAPD Lost & Found",
                &["wallets", "tech", "catcard", "id", "valuable", "phone", "laptop"],
                "https://uapd.arizona.edu/lost-and-found",
                Area::CentralCampus,
            ),
            CatalogEntry::new(
                "Main Library Ask Us",
                &["books", "notebooks", "laptop", "study", "materials"],
                "https://library.arizona.edu",
                Area::LibraryArea,
            ),
            CatalogEntry::new(
                "Likins Hall Desk",
                &["clothes", "personal", "keys", "dorm", "residential"],
                "https://housing.arizona.edu",
                Area::SouthCampus,
            ),
            CatalogEntry::new(
                "Parking Office",
                &["bikes", "gear", "helmet", "skateboard", "transportation"],
                "https://parking.arizona.edu",
                Area::EastCampus,
            ),
        ];

        Self::new(entries).expect("built-in catalog entries are valid")
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.entries()[0].name, "Student Union Info Desk");
        assert_eq!(catalog.entries()[4].name, "Parking Office");
    }

    #[test]
    fn rejects_duplicate_names() {
        let entries = vec![
            CatalogEntry::new("Front Desk", &["keys"], "https://example.edu", Area::CentralCampus),
            CatalogEntry::new("Front Desk", &["bags"], "https://example.edu", Area::EastCampus),
        ];
        match Catalog::new(entries) {
            Err(CatalogError::DuplicateName(name)) => assert_eq!(name, "Front Desk"),
            other => panic!("expected duplicate name error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_tags() {
        let entries = vec![CatalogEntry::new(
            "Front Desk",
            &[],
            "https://example.edu",
            Area::CentralCampus,
        )];
        assert!(matches!(Catalog::new(entries), Err(CatalogError::EmptyTags(_))));
    }
}
