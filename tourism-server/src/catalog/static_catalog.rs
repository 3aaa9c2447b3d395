//! JSON-backed reference catalog.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::{Hotel, PointOfInterest};

use super::error::CatalogError;
use super::{AttractionCatalog, HotelCatalog};

const BUILTIN_ATTRACTIONS: &str = include_str!("../../data/attractions.json");
const BUILTIN_HOTELS: &str = include_str!("../../data/hotels.json");

/// Read-only catalog of attractions and hotels held in memory.
///
/// Entries keep the order they were loaded in; that order is the tie-break
/// for equal distances in proximity search.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    attractions: Vec<PointOfInterest>,
    hotels: Vec<Hotel>,
}

impl StaticCatalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(attractions: Vec<PointOfInterest>, hotels: Vec<Hotel>) -> Result<Self, CatalogError> {
        check_unique("attraction", attractions.iter().map(|a| a.id.as_str()))?;
        check_unique("hotel", hotels.iter().map(|h| h.id.as_str()))?;
        Ok(Self {
            attractions,
            hotels,
        })
    }

    /// The catalog compiled into the binary (Jharkhand attractions and
    /// tourism department hotels).
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_ATTRACTIONS, BUILTIN_HOTELS)
    }

    /// Parse a catalog from JSON arrays of attractions and hotels.
    pub fn from_json(attractions: &str, hotels: &str) -> Result<Self, CatalogError> {
        Self::new(
            parse_list("attractions", attractions)?,
            parse_list("hotels", hotels)?,
        )
    }

    /// Replace the attractions with those from a JSON file, keeping hotels.
    pub fn with_attractions_file(self, path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::new(parse_list("attractions", &json)?, self.hotels)
    }
}

impl AttractionCatalog for StaticCatalog {
    fn list_all(&self) -> &[PointOfInterest] {
        &self.attractions
    }
}

impl HotelCatalog for StaticCatalog {
    fn list_hotels(&self) -> &[Hotel] {
        &self.hotels
    }
}

fn parse_list<T: DeserializeOwned>(what: &'static str, json: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::Json {
        what,
        message: e.to_string(),
    })
}

fn check_unique<'a>(
    what: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                what,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ONE_ATTRACTION: &str = r#"[{
        "id": "test_001",
        "name": "Test Falls",
        "city": "Testpur",
        "coordinates": {"lat": 23.0, "lng": 85.0},
        "type": "waterfall",
        "interest_tags": ["Adventure"]
    }]"#;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = StaticCatalog::builtin().unwrap();

        assert_eq!(catalog.list_all().len(), 19);
        assert_eq!(catalog.list_hotels().len(), 9);
        assert_eq!(catalog.list_all()[0].id, "ranchi_001");
    }

    #[test]
    fn builtin_tour_has_price() {
        let catalog = StaticCatalog::builtin().unwrap();
        let tour = catalog.by_id("ranchi_009").unwrap();
        assert_eq!(tour.category, "tour");
        assert_eq!(tour.price.as_deref(), Some("₹2800/person"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = format!(
            "[{}, {}]",
            ONE_ATTRACTION.trim_start_matches('[').trim_end_matches(']'),
            ONE_ATTRACTION.trim_start_matches('[').trim_end_matches(']')
        );
        let err = StaticCatalog::from_json(&json, "[]").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId { what: "attraction", ref id } if id == "test_001"
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = StaticCatalog::from_json("[{]", "[]").unwrap_err();
        assert!(matches!(err, CatalogError::Json { what: "attractions", .. }));
    }

    #[test]
    fn attractions_file_replaces_builtin() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ONE_ATTRACTION.as_bytes()).unwrap();

        let catalog = StaticCatalog::builtin()
            .unwrap()
            .with_attractions_file(file.path())
            .unwrap();

        assert_eq!(catalog.list_all().len(), 1);
        assert_eq!(catalog.list_all()[0].name, "Test Falls");
        assert_eq!(catalog.list_hotels().len(), 9);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = StaticCatalog::builtin()
            .unwrap()
            .with_attractions_file("/nonexistent/attractions.json")
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
