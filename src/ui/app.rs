use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::ui::catalog_context::CatalogProvider;
use crate::ui::components::{ProductList, StoreLayout};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StoreLayout)]
    #[route("/?:..query")]
    ProductList { query: String },
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    use_context_provider(Config::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        CatalogProvider {
            Router::<Route> {}
        }
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("shopfront")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
