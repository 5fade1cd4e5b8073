use std::{collections::HashSet, sync::Arc};

use once_cell::sync::Lazy;
use shared_types::{Coordinates, LocationId, LocationRecord};
use thiserror::Error;

const LOCATIONS_JSON: &str = include_str!("../data/locations.json");

static BULGARIA: Lazy<Result<Arc<LocationCatalog>, CatalogError>> =
    Lazy::new(|| LocationCatalog::from_json(LOCATIONS_JSON).map(Arc::new));

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("failed to parse location catalog: {0}")]
    Parse(String),
    #[error("location catalog is empty")]
    Empty,
    #[error("duplicate location id {0}")]
    DuplicateId(LocationId),
    #[error("location {id} has invalid coordinates {coordinates}")]
    InvalidCoordinates {
        id: LocationId,
        coordinates: Coordinates,
    },
    #[error("location {0} has a blank name")]
    BlankName(LocationId),
}

/// Immutable, ordered set of birding sites. Always non-empty with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationCatalog {
    records: Vec<LocationRecord>,
}

impl LocationCatalog {
    pub fn new(records: Vec<LocationRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if !record.coordinates.is_valid() {
                return Err(CatalogError::InvalidCoordinates {
                    id: record.id,
                    coordinates: record.coordinates,
                });
            }
            if record.name.trim().is_empty() {
                return Err(CatalogError::BlankName(record.id));
            }
        }

        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<LocationRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(records)
    }

    /// The catalog compiled into the binary.
    pub fn bulgaria() -> Result<Arc<LocationCatalog>, CatalogError> {
        (*BULGARIA).clone()
    }

    pub fn all(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn first(&self) -> &LocationRecord {
        // non-empty is checked in `new`
        &self.records[0]
    }

    pub fn get(&self, id: LocationId) -> Option<&LocationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(id: u32, lat: f64, long: f64) -> LocationRecord {
        LocationRecord {
            id: LocationId(id),
            name: format!("Site {id}"),
            coordinates: Coordinates::new(lat, long),
            region: "Eastern Rhodopes".to_string(),
            best_time: "Dawn".to_string(),
            species: "Griffon Vulture, Black Stork".to_string(),
            image_url: format!("https://example.org/{id}.jpg"),
            description: "Gorge".to_string(),
            pro_tip: "Arrive early".to_string(),
        }
    }

    pub(crate) fn two_site_catalog() -> Arc<LocationCatalog> {
        Arc::new(
            LocationCatalog::new(vec![record(1, 41.64, 25.86), record(2, 42.44, 27.47)])
                .expect("valid catalog"),
        )
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = LocationCatalog::bulgaria().expect("bundled catalog must validate");
        assert!(catalog.len() >= 4);
        assert_eq!(catalog.first().name, "Madzharovo Vulture Hide");
        assert!(catalog.all().iter().all(|r| r.species_tags().count() > 0));
    }

    #[test]
    fn keeps_insertion_order() {
        let catalog = LocationCatalog::new(vec![
            record(3, 42.0, 27.0),
            record(1, 41.0, 25.0),
            record(2, 43.0, 28.0),
        ])
        .unwrap();
        let ids: Vec<u32> = catalog.all().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(catalog.first().id, LocationId(3));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(LocationCatalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = LocationCatalog::new(vec![record(1, 41.0, 25.0), record(1, 42.0, 27.0)]);
        assert_eq!(result, Err(CatalogError::DuplicateId(LocationId(1))));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let result = LocationCatalog::new(vec![record(9, 142.0, 27.0)]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidCoordinates { id: LocationId(9), .. })
        ));
    }

    #[test]
    fn rejects_blank_names() {
        let mut blank = record(4, 42.0, 27.0);
        blank.name = "  ".to_string();
        assert_eq!(
            LocationCatalog::new(vec![blank]),
            Err(CatalogError::BlankName(LocationId(4)))
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            LocationCatalog::from_json("[{\"id\": 1}]"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = two_site_catalog();
        assert_eq!(catalog.get(LocationId(2)).map(|r| r.coordinates.lat), Some(42.44));
        assert!(catalog.contains(LocationId(1)));
        assert!(!catalog.contains(LocationId(99)));
    }
}
