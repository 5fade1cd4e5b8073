use js_sys::{Object, Reflect};
use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::*};
use shared_types::Coordinates;
use wasm_bindgen::JsValue;

use crate::viewport::ViewportSurface;

/// [`ViewportSurface`] over the mounted Leaflet map. Commands issued before
/// the map exists are dropped.
#[derive(Clone, Copy)]
pub struct LeafletSurface {
    map: JsRwSignal<Option<Map>>,
}

impl LeafletSurface {
    pub fn new(map: JsRwSignal<Option<Map>>) -> Self {
        Self { map }
    }

    fn mounted(&self, command: &str) -> Option<Map> {
        let map = self.map.get_untracked();
        if map.is_none() {
            tracing::debug!(command, "map not mounted yet, skipping");
        }
        map
    }
}

impl ViewportSurface for LeafletSurface {
    fn fly_to(&self, target: Coordinates, zoom: f64, duration_secs: f64) {
        let Some(map) = self.mounted("flyTo") else {
            return;
        };
        let center = Position::new(target.lat, target.long).as_lat_lng();
        let options = zoom_pan_options(&[
            ("animate", JsValue::TRUE),
            ("duration", JsValue::from_f64(duration_secs)),
        ]);
        map.fly_to_with_options(&center, zoom, &options);
    }

    fn invalidate_size(&self) {
        let Some(map) = self.mounted("invalidateSize") else {
            return;
        };
        // panning here would cancel a running flyTo
        let options = zoom_pan_options(&[("pan", JsValue::FALSE)]);
        map.invalidate_size_with_options(&options);
    }
}

fn zoom_pan_options(entries: &[(&str, JsValue)]) -> JsValue {
    let options = Object::new();
    for (key, value) in entries {
        if let Err(err) = Reflect::set(&options, &JsValue::from_str(key), value) {
            tracing::warn!(key, ?err, "failed to set leaflet option");
        }
    }
    options.into()
}
