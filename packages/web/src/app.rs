//! Root application component

use dioxus::prelude::*;

use crate::api::{build_api, page_config};
use crate::components::{AuthModal, Header, ProductGrid, ToastStack};
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> Element {
    // State lives here so it survives the modal closing mid-request
    use_context_provider(|| {
        let (config, demo) = page_config();
        let api = build_api(&config, demo);
        AppState::new(api, config.locale, config.notification_ttl)
    });

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Header {}
            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                ProductGrid {}
            }
            AuthModal {}
            ToastStack {}
        }
    }
}
