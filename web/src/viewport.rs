use shared_types::{Coordinates, LocationRecord};

use crate::{
    selection::{SelectionStore, SubscriptionId},
    settings::MapSettings,
};

/// The two commands the guide issues to whatever renders the map.
pub trait ViewportSurface {
    /// Animate the viewport center to `target`.
    fn fly_to(&self, target: Coordinates, zoom: f64, duration_secs: f64);
    /// Re-measure the container after a layout change.
    fn invalidate_size(&self);
}

/// Moves the map to each newly selected location.
#[derive(Debug, Clone)]
pub struct ViewportController<S> {
    surface: S,
    zoom: f64,
    duration_secs: f64,
}

impl<S: ViewportSurface> ViewportController<S> {
    pub fn new(surface: S, settings: &MapSettings) -> Self {
        Self {
            surface,
            zoom: settings.fly_zoom,
            duration_secs: settings.fly_duration_secs,
        }
    }

    pub fn on_selection_changed(&self, record: &LocationRecord) {
        self.surface
            .fly_to(record.coordinates, self.zoom, self.duration_secs);
        self.surface.invalidate_size();
    }

    pub fn revalidate(&self) {
        self.surface.invalidate_size();
    }

    /// Registers the controller with `store`. It fires once per committed
    /// change and never for the initial selection.
    pub fn attach(self, store: &mut SelectionStore) -> SubscriptionId
    where
        S: Send + Sync + 'static,
    {
        store.subscribe(move |record| self.on_selection_changed(record))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use shared_types::LocationId;

    use super::*;
    use crate::catalog::tests::two_site_catalog;

    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        FlyTo(Coordinates, f64, f64),
        InvalidateSize,
    }

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<Command>>>);

    impl ViewportSurface for Recorder {
        fn fly_to(&self, target: Coordinates, zoom: f64, duration_secs: f64) {
            self.0
                .lock()
                .unwrap()
                .push(Command::FlyTo(target, zoom, duration_secs));
        }

        fn invalidate_size(&self) {
            self.0.lock().unwrap().push(Command::InvalidateSize);
        }
    }

    #[test]
    fn flies_then_revalidates_on_change() {
        let recorder = Recorder::default();
        let mut store = SelectionStore::new(two_site_catalog());
        ViewportController::new(recorder.clone(), &MapSettings::default()).attach(&mut store);

        store.select(LocationId(2));

        assert_eq!(
            *recorder.0.lock().unwrap(),
            vec![
                Command::FlyTo(Coordinates::new(42.44, 27.47), 12.0, 1.5),
                Command::InvalidateSize,
            ]
        );
    }

    #[test]
    fn attaching_does_not_fly() {
        let recorder = Recorder::default();
        let mut store = SelectionStore::new(two_site_catalog());
        ViewportController::new(recorder.clone(), &MapSettings::default()).attach(&mut store);
        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[test]
    fn uses_configured_zoom_and_duration() {
        let recorder = Recorder::default();
        let settings = MapSettings {
            fly_zoom: 9.0,
            fly_duration_secs: 2.0,
            ..MapSettings::default()
        };
        let mut store = SelectionStore::new(two_site_catalog());
        ViewportController::new(recorder.clone(), &settings).attach(&mut store);

        store.select(LocationId(2));
        store.select(LocationId(1));

        let commands = recorder.0.lock().unwrap();
        assert_eq!(
            commands.iter().filter(|c| **c == Command::InvalidateSize).count(),
            2
        );
        assert_eq!(
            commands[2],
            Command::FlyTo(Coordinates::new(41.64, 25.86), 9.0, 2.0)
        );
    }

    #[test]
    fn revalidate_only_invalidates() {
        let recorder = Recorder::default();
        ViewportController::new(recorder.clone(), &MapSettings::default()).revalidate();
        assert_eq!(*recorder.0.lock().unwrap(), vec![Command::InvalidateSize]);
    }
}
