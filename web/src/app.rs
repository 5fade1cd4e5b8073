use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::{
    catalog::LocationCatalog, components::error::ErrorView, settings::MapSettings,
    views::guide::BirdingGuide,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/leaflet@1.9.3/dist/leaflet.css"
                />
                <script
                    src="https://unpkg.com/leaflet@1.9.3/dist/leaflet.js"
                    defer
                ></script>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/birding-web.css"/>

        <Title text="Bulgaria Bird Photography"/>
        <Meta name="description" content="Birdwatching and bird photography locations in Bulgaria"/>

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=GuidePage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

/// Renders the guide, or the error view if the bundled catalog is broken.
#[component]
fn GuidePage() -> impl IntoView {
    match LocationCatalog::bulgaria() {
        Ok(catalog) => view! {
            <BirdingGuide catalog=catalog settings=MapSettings::default() />
        }
        .into_any(),
        Err(err) => {
            tracing::error!(error = %err, "location catalog failed validation");
            view! {
                <ErrorView title="The location guide could not be loaded" message=Some(err.to_string()) />
            }
            .into_any()
        }
    }
}
