use leptos::prelude::*;
use shared_types::{LocationId, LocationRecord};

use crate::{components::species_tag::SpeciesTag, settings::MapSettings, state::GuideState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Collapsed,
    Expanded,
}

impl CardState {
    pub fn for_location(id: LocationId, active: LocationId) -> Self {
        if id == active {
            CardState::Expanded
        } else {
            CardState::Collapsed
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CardState::Collapsed => "location-card",
            CardState::Expanded => "location-card location-card--active",
        }
    }
}

#[component]
pub fn LocationCard(
    location: LocationRecord,
    state: GuideState,
    settings: MapSettings,
) -> impl IntoView {
    let id = location.id;
    let card_state = Memo::new(move |_| CardState::for_location(id, state.active_id()));
    let details = location.clone();

    view! {
        <article class=move || card_state.get().class() on:click=move |_| state.select(id)>
            <h3 class="location-card__name">{location.name.clone()}</h3>
            <p class="location-card__region">{location.region.clone()}</p>
            <p class="location-card__time">
                <b>"Time: "</b>
                {location.best_time.clone()}
            </p>
            <Show when=move || card_state.get() == CardState::Expanded>
                <LocationDetails location=details.clone() settings=settings.clone() />
            </Show>
        </article>
    }
}

#[component]
fn LocationDetails(location: LocationRecord, settings: MapSettings) -> impl IntoView {
    let tags = location
        .species_tags()
        .map(|species| {
            view! { <SpeciesTag name=species.to_string() settings=settings.clone() /> }
        })
        .collect_view();

    view! {
        <div class="location-card__details">
            <img class="location-card__image" src=location.image_url.clone() alt=location.species.clone() />
            <p class="location-card__description">{location.description.clone()}</p>
            <div class="location-card__species">
                <b>"Species: "</b>
                {tags}
            </div>
            <p class="location-card__tip">
                <b>"Pro Tip: "</b>
                {location.pro_tip.clone()}
            </p>
        </div>
    }
}
