use leptos::prelude::*;
use shared_types::LocationRecord;
use thaw::{Label, LabelSize};

#[component]
pub fn MapMarkerPopup(location: LocationRecord) -> impl IntoView {
    view! {
        <div class="marker-popup">
            <Label size=LabelSize::Large>{location.name.clone()}</Label>
            <p class="marker-popup__region">{location.region.clone()}</p>
            <p class="marker-popup__time">{format!("Best time: {}", location.best_time)}</p>
        </div>
    }
}
