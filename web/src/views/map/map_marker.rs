use crate::{
    settings::MapSettings, state::GuideState, views::map::map_marker_popup::MapMarkerPopup,
};
use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{LocationId, LocationRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Active,
    Inactive,
}

impl MarkerState {
    pub fn for_location(id: LocationId, active: LocationId) -> Self {
        if id == active {
            MarkerState::Active
        } else {
            MarkerState::Inactive
        }
    }

    pub fn icon_size(self) -> (f64, f64) {
        match self {
            MarkerState::Active => (36.0, 54.0),
            MarkerState::Inactive => (28.0, 42.0),
        }
    }

    /// Bottom tip of the pin.
    pub fn icon_anchor(self) -> (f64, f64) {
        let (width, height) = self.icon_size();
        (width / 2.0, height)
    }

    /// SVG pin as a data URI, filled with the colour for this state.
    pub fn icon_url(self, settings: &MapSettings) -> String {
        let color = match self {
            MarkerState::Active => &settings.active_marker_color,
            MarkerState::Inactive => &settings.inactive_marker_color,
        };
        let (width, height) = self.icon_size();

        format!(
            "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 28 42'%3E%3Cdefs%3E%3Cfilter id='shadow' x='-50%25' y='-50%25' width='200%25' height='200%25'%3E%3CfeDropShadow dx='0' dy='1' stdDeviation='1.5' flood-color='%23000' flood-opacity='0.25'/%3E%3C/filter%3E%3C/defs%3E%3Cpath fill='{fill}' stroke='%23ffffff' stroke-width='1.5' filter='url(%23shadow)' d='M14 2C8.5 2 4 6.5 4 12c0 8.5 10 26 10 26s10-17.5 10-26c0-5.5-4.5-10-10-10zm0 13.5c-1.9 0-3.5-1.6-3.5-3.5s1.6-3.5 3.5-3.5 3.5 1.6 3.5 3.5-1.6 3.5-3.5 3.5z'/%3E%3C/svg%3E",
            fill = urlencoding::encode(color),
        )
    }
}

/// Icon props for one marker, derived from its [`MarkerState`].
#[derive(Clone, Copy)]
pub struct MarkerIcon {
    pub url: Signal<Option<String>>,
    pub size: Signal<Option<(f64, f64)>>,
    pub anchor: Signal<Option<(f64, f64)>>,
}

impl MarkerIcon {
    pub fn new(marker_state: Memo<MarkerState>, settings: &MapSettings) -> Self {
        let settings = settings.clone();
        Self {
            url: Signal::derive(move || Some(marker_state.get().icon_url(&settings))),
            size: Signal::derive(move || Some(marker_state.get().icon_size())),
            anchor: Signal::derive(move || Some(marker_state.get().icon_anchor())),
        }
    }
}

/// One Leaflet marker for the whole session; only its icon follows the selection,
/// so an open popup survives the state flip.
#[component]
pub fn MapMarker(location: LocationRecord, state: GuideState, settings: MapSettings) -> impl IntoView {
    let id = location.id;
    let marker_state = Memo::new(move |_| MarkerState::for_location(id, state.active_id()));
    let icon = MarkerIcon::new(marker_state, &settings);
    let position = Position::new(location.coordinates.lat, location.coordinates.long);

    view! {
        <Marker
            position=position
            draggable=false
            icon_url=icon.url
            icon_size=icon.size
            icon_anchor=icon.anchor
            mouse_events=MouseEvents::new().on_click(move |_| state.select(id))
        >
            <Popup>
                <MapMarkerPopup location=location />
            </Popup>
        </Marker>
    }
}
