use leptos::prelude::*;

use crate::settings::MapSettings;

/// Whether a click should continue on to the enclosing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

pub trait ExternalLinks {
    fn open_in_new_context(&self, url: &str);
}

/// Opens links with `window.open(url, "_blank")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLinks;

impl ExternalLinks for BrowserLinks {
    fn open_in_new_context(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url_and_target(url, "_blank") {
                tracing::warn!(url, ?err, "failed to open external link");
            }
        }
    }
}

/// Opens the species search and keeps the click away from the card,
/// calling `stop_propagation` on the event before it bubbles.
pub fn on_tag_click(
    species: &str,
    settings: &MapSettings,
    links: &impl ExternalLinks,
    stop_propagation: impl FnOnce(),
) -> Propagation {
    links.open_in_new_context(&settings.species_search_url(species));
    stop_propagation();
    Propagation::Stop
}

#[component]
pub fn SpeciesTag(#[prop(into)] name: String, settings: MapSettings) -> impl IntoView {
    let label = name.clone();
    let title = format!("Search for {name}");

    view! {
        <button
            type="button"
            class="species-tag"
            title=title
            on:click=move |ev: web_sys::MouseEvent| {
                on_tag_click(&name, &settings, &BrowserLinks, || ev.stop_propagation());
            }
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct Recorded(RefCell<Vec<String>>);

    impl ExternalLinks for Recorded {
        fn open_in_new_context(&self, url: &str) {
            self.0.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn tag_click_opens_search_and_stops() {
        let links = Recorded::default();
        let stopped = Cell::new(false);
        let outcome = on_tag_click("Greater Flamingo", &MapSettings::default(), &links, || {
            stopped.set(true)
        });

        assert_eq!(outcome, Propagation::Stop);
        assert!(stopped.get());
        assert_eq!(
            *links.0.borrow(),
            vec!["https://www.google.com/search?q=Greater%20Flamingo".to_string()]
        );
    }
}
