use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a birding site within the catalog.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// True when both components are finite and inside WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.long.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.long)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.long)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocationRecord {
    pub id: LocationId,
    pub name: String,
    pub coordinates: Coordinates,
    pub region: String,
    pub best_time: String,
    /// Comma-delimited, free text. See [`LocationRecord::species_tags`].
    pub species: String,
    pub image_url: String,
    pub description: String,
    pub pro_tip: String,
}

impl LocationRecord {
    /// Splits the species text into display tags, dropping empty fragments.
    pub fn species_tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.species
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}
