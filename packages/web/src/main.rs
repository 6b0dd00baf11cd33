use dioxus::prelude::*;

use store::TodoConfig;
use ui::{use_app, AppProvider, APP_TITLE};
use views::{Login, Todos};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Build-time copy of `apollogs.toml`.
const CONFIG_TOML: &str = include_str!("../apollogs.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> TodoConfig {
    match TodoConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", TodoConfig::filename(), e);
            TodoConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Title { "{APP_TITLE}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            config: config,
            Root {}
        }
    }
}

/// Sign-in page until a session exists, the workspace afterwards.
#[component]
fn Root() -> Element {
    let app = use_app();
    let signed_in = app.session.read().is_some();

    rsx! {
        if signed_in {
            Todos {}
        } else {
            Login {}
        }
    }
}
