use client::{ApiClient, ResourceCache, Session};
use dioxus::prelude::*;

mod auth;
mod fetch;
mod format_helpers;
mod routes;

use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = client::config::load_config();

    use_context_provider(move || {
        let session = Session::persistent(config.storage.data_dir.as_deref());
        let api = ApiClient::from_config(config, session.clone());
        tracing::info!(base_url = api.base_url(), "API client ready");
        AuthState::new(session, api)
    });

    // One cache for the whole app; dashboards share snapshots through it.
    use_context_provider(|| Signal::new(ResourceCache::new()));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
