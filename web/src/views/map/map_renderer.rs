use std::sync::Arc;

use crate::{
    catalog::LocationCatalog,
    settings::MapSettings,
    state::GuideState,
    viewport::ViewportController,
    views::map::{leaflet_surface::LeafletSurface, map_marker::MapMarker},
};
use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::*};

#[component]
pub fn MapRenderer(
    catalog: Arc<LocationCatalog>,
    state: GuideState,
    settings: MapSettings,
    sidebar_collapsed: RwSignal<bool>,
) -> impl IntoView {
    let initial = catalog.get(state.active_id_untracked()).unwrap_or(catalog.first());
    let center = Position::new(initial.coordinates.lat, initial.coordinates.long);

    let map = JsRwSignal::new_local(None::<Map>);
    let controller = ViewportController::new(LeafletSurface::new(map), &settings);

    if let Some(subscription) = state.attach_viewport(controller.clone()) {
        on_cleanup(move || state.unsubscribe(subscription));
    }

    // The sidebar changes the map container's width.
    Effect::watch(
        move || sidebar_collapsed.get(),
        move |_, _, _| controller.revalidate(),
        false,
    );

    view! {
        <MapContainer
            style="height: 100%; width: 100%; flex: 1"
            center=center
            zoom=settings.initial_zoom
            set_view=true
            map=map.write_only()
        >
            <TileLayer
                url=settings.tile_url.clone()
                attribution=settings.tile_attribution.clone()
            />
            {catalog
                .all()
                .iter()
                .cloned()
                .map(|location| {
                    view! { <MapMarker location=location state=state settings=settings.clone() /> }
                })
                .collect_view()}
        </MapContainer>
    }
}
