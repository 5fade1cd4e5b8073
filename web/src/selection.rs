use std::{fmt, sync::Arc};

use shared_types::{LocationId, LocationRecord};
use thiserror::Error;

use crate::catalog::LocationCatalog;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    #[error("active location {0} is not in the catalog")]
    NotFound(LocationId),
}

/// Callback run after a selection change has been committed.
///
/// Listeners run synchronously inside [`SelectionStore::select`] and must not
/// call back into the store.
pub type Listener = Box<dyn Fn(&LocationRecord) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Changed,
    Unchanged,
    Unknown,
}

/// Holds the one active location and notifies listeners when it changes.
pub struct SelectionStore {
    catalog: Arc<LocationCatalog>,
    active: LocationId,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl SelectionStore {
    /// Starts with the first catalog entry active.
    pub fn new(catalog: Arc<LocationCatalog>) -> Self {
        let active = catalog.first().id;
        Self {
            catalog,
            active,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    pub fn active_id(&self) -> LocationId {
        self.active
    }

    pub fn is_active(&self, id: LocationId) -> bool {
        self.active == id
    }

    pub fn current(&self) -> Result<&LocationRecord, SelectionError> {
        self.catalog
            .get(self.active)
            .ok_or(SelectionError::NotFound(self.active))
    }

    /// Makes `id` active. Unknown ids and re-selecting the active id are no-ops;
    /// listeners only hear about real changes.
    pub fn select(&mut self, id: LocationId) -> SelectOutcome {
        let Some(record) = self.catalog.get(id) else {
            tracing::warn!(%id, "ignoring selection of unknown location");
            return SelectOutcome::Unknown;
        };
        if self.active == id {
            return SelectOutcome::Unchanged;
        }

        tracing::debug!(from = %self.active, to = %id, name = %record.name, "location selected");
        self.active = id;

        for (_, listener) in &self.listeners {
            listener(record);
        }
        SelectOutcome::Changed
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&LocationRecord) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("active", &self.active)
            .field("catalog_len", &self.catalog.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::catalog::tests::two_site_catalog;

    fn recording_store() -> (SelectionStore, Arc<Mutex<Vec<LocationId>>>) {
        let mut store = SelectionStore::new(two_site_catalog());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |record| sink.lock().unwrap().push(record.id));
        (store, seen)
    }

    #[test]
    fn starts_on_first_catalog_entry() {
        let store = SelectionStore::new(two_site_catalog());
        assert_eq!(store.active_id(), LocationId(1));
        assert_eq!(store.current().unwrap().name, "Site 1");
    }

    #[test]
    fn select_commits_before_notifying() {
        let mut store = SelectionStore::new(two_site_catalog());
        let observed = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&observed);
        store.subscribe(move |record| *sink.lock().unwrap() = Some(record.coordinates));

        assert_eq!(store.select(LocationId(2)), SelectOutcome::Changed);
        assert_eq!(store.active_id(), LocationId(2));
        let coords = observed.lock().unwrap().expect("listener ran");
        assert_eq!((coords.lat, coords.long), (42.44, 27.47));
    }

    #[test]
    fn reselecting_active_id_does_not_notify() {
        let (mut store, seen) = recording_store();
        assert_eq!(store.select(LocationId(1)), SelectOutcome::Unchanged);
        assert_eq!(store.select(LocationId(2)), SelectOutcome::Changed);
        assert_eq!(store.select(LocationId(2)), SelectOutcome::Unchanged);
        assert_eq!(*seen.lock().unwrap(), vec![LocationId(2)]);
    }

    #[test]
    fn unknown_id_leaves_selection_untouched() {
        let (mut store, seen) = recording_store();
        assert_eq!(store.select(LocationId(42)), SelectOutcome::Unknown);
        assert_eq!(store.active_id(), LocationId(1));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = SelectionStore::new(two_site_catalog());
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        let subscription = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        store.select(LocationId(2));
        assert_eq!(*calls.lock().unwrap(), 0);
        assert_eq!(store.listener_count(), 0);
    }
}
