use std::sync::Arc;

use leptos::prelude::*;

use crate::{
    catalog::LocationCatalog,
    settings::MapSettings,
    state::GuideState,
    views::{map::map_renderer::MapRenderer, sidebar::location_list::LocationList},
};

/// Sidebar list and map, both driven by one [`GuideState`].
#[component]
pub fn BirdingGuide(catalog: Arc<LocationCatalog>, settings: MapSettings) -> impl IntoView {
    let state = GuideState::new(Arc::clone(&catalog));
    let sidebar_collapsed = RwSignal::new(false);

    let toggle_sidebar = move |_ev: web_sys::MouseEvent| {
        sidebar_collapsed.update(|c| *c = !*c);
    };

    let names = Arc::clone(&catalog);
    let active_name = move || {
        names
            .get(state.active_id())
            .map(|record| record.name.clone())
            .unwrap_or_default()
    };

    view! {
        <div class="guide-container">
            <aside class="guide-sidebar" class:collapsed=sidebar_collapsed>
                <button class="sidebar-toggle" on:click=toggle_sidebar>
                    {move || if sidebar_collapsed.get() { "Show sites" } else { "Hide sites" }}
                </button>
                <div class="sidebar-current">{active_name}</div>
                <div class="sidebar-content">
                    <LocationList
                        catalog=Arc::clone(&catalog)
                        state=state
                        settings=settings.clone()
                    />
                </div>
            </aside>

            <div class="guide-map-wrapper">
                <MapRenderer
                    catalog=catalog
                    state=state
                    settings=settings.clone()
                    sidebar_collapsed=sidebar_collapsed
                />

                <div class="map-legend">
                    <h4>"Map Legend"</h4>
                    <div class="legend-items">
                        <div class="legend-item">
                            <div class="legend-marker active" style:background=settings.active_marker_color.clone()></div>
                            <span>"Selected site"</span>
                        </div>
                        <div class="legend-item">
                            <div class="legend-marker" style:background=settings.inactive_marker_color.clone()></div>
                            <span>"Other sites"</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
