/// Map and link settings shared by the list and the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub tile_url: String,
    pub tile_attribution: String,
    pub initial_zoom: f64,
    pub fly_zoom: f64,
    pub fly_duration_secs: f64,
    pub species_search_url: String,
    pub active_marker_color: String,
    pub inactive_marker_color: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            initial_zoom: 12.0,
            fly_zoom: 12.0,
            fly_duration_secs: 1.5,
            species_search_url: "https://www.google.com/search?q=".to_string(),
            active_marker_color: "#2d5a27".to_string(),
            inactive_marker_color: "#6b7280".to_string(),
        }
    }
}

impl MapSettings {
    /// Web search for a species name, percent-encoded.
    pub fn species_search_url(&self, species: &str) -> String {
        format!("{}{}", self.species_search_url, urlencoding::encode(species))
    }
}
