use std::sync::Arc;

use leptos::prelude::*;
use shared_types::LocationId;

use crate::{
    catalog::LocationCatalog,
    selection::{SelectionStore, SubscriptionId},
    viewport::{ViewportController, ViewportSurface},
};

/// Copyable handle the list and the map share.
///
/// The [`SelectionStore`] stays the source of truth; `active` mirrors its id
/// so views can track it reactively.
#[derive(Clone, Copy)]
pub struct GuideState {
    store: StoredValue<SelectionStore>,
    active: RwSignal<LocationId>,
}

impl GuideState {
    pub fn new(catalog: Arc<LocationCatalog>) -> Self {
        let mut store = SelectionStore::new(catalog);
        let active = RwSignal::new(store.active_id());
        store.subscribe(move |record| active.set(record.id));

        Self {
            store: StoredValue::new(store),
            active,
        }
    }

    /// Tracked read of the active id.
    pub fn active_id(&self) -> LocationId {
        self.active.get()
    }

    pub fn active_id_untracked(&self) -> LocationId {
        self.active.get_untracked()
    }

    pub fn select(&self, id: LocationId) {
        self.store.update_value(|store| {
            store.select(id);
        });
    }

    pub fn attach_viewport<S>(&self, controller: ViewportController<S>) -> Option<SubscriptionId>
    where
        S: ViewportSurface + Send + Sync + 'static,
    {
        let mut subscription = None;
        self.store.update_value(|store| {
            subscription = Some(controller.attach(store));
        });
        subscription
    }

    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        self.store.update_value(|store| {
            store.unsubscribe(subscription);
        });
    }
}
