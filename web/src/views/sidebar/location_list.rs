use std::sync::Arc;

use leptos::prelude::*;

use crate::{
    catalog::LocationCatalog, settings::MapSettings, state::GuideState,
    views::sidebar::location_card::LocationCard,
};

/// Every catalog entry as a card, in catalog order.
#[component]
pub fn LocationList(
    catalog: Arc<LocationCatalog>,
    state: GuideState,
    settings: MapSettings,
) -> impl IntoView {
    view! {
        <div class="sidebar-header">
            <h1>"Bulgaria Bird Photography"</h1>
            <p>"A specialized 48-hour guide for the Eastern Rhodopes and Coast."</p>
        </div>
        <div class="location-list">
            {catalog
                .all()
                .iter()
                .cloned()
                .map(|location| {
                    view! { <LocationCard location=location state=state settings=settings.clone() /> }
                })
                .collect_view()}
        </div>
    }
}
