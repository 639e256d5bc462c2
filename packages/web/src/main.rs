//! Storefront - Dioxus web front end
//!
//! Renders the product grid, the four-step sign-in / sign-up modal and the
//! toast stack on top of `storefront-core`.
//!
//! ## Running
//!
//! ```bash
//! dx serve --platform web
//! ```
//!
//! Append `?demo` to the page URL to use the in-memory backend, and
//! `?lang=fa` for Persian price formatting.

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod state;

use tracing_subscriber::EnvFilter;

fn main() {
    // Browsers have no wall clock for the default timer
    tracing_subscriber::fmt()
        .without_time()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    // Builds that talk to a backend on another origin bake its URL in
    if let Some(url) = option_env!("STOREFRONT_API_URL") {
        api::init_api_url(url.to_string());
    }

    dioxus::launch(app::App);
}
