use api::HttpGateway;
use dioxus::prelude::*;
use store::HubConfig;

use views::{Home, Posts, Shell, Todos, Unmatched};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/posts")]
        Posts {},
        #[route("/todos")]
        Todos {},
        #[route("/:..segments")]
        Unmatched { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Build-time configuration, see `userhub.toml` next to this crate's manifest.
const CONFIG_TOML: &str = include_str!("../userhub.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> HubConfig {
    match HubConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", HubConfig::filename(), e);
            HubConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let gateway = use_hook(|| HttpGateway::new(&config.api.base_url));
    let session_store = use_hook(|| ui::make_session_store(&config.session.storage_key));

    ui::use_hub_provider(gateway, session_store);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
