//! Backend selection for the browser

use std::sync::OnceLock;

use storefront_core::{ClientConfig, ClientTransport, HttpTransport, Locale, StorefrontApi};
use tracing::{info, warn};

static API_URL: OnceLock<String> = OnceLock::new();

/// Override the API base URL. Call this before the app launches.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// The configured API base URL, or the page origin
pub fn get_api_url() -> String {
    if let Some(url) = API_URL.get() {
        return url.clone();
    }
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Value of a query parameter in the page URL
fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    if !params.has(name) {
        return None;
    }
    Some(params.get(name).unwrap_or_default())
}

/// Client settings derived from the page URL
pub fn page_config() -> (ClientConfig, bool) {
    let mut config = ClientConfig::default().with_api_url(get_api_url());
    if let Some(locale) = query_param("lang").and_then(|lang| lang.parse::<Locale>().ok()) {
        config.locale = locale;
    }
    let demo = query_param("demo").is_some();
    (config, demo)
}

pub fn build_api(config: &ClientConfig, demo: bool) -> StorefrontApi<ClientTransport> {
    let transport = match ClientTransport::from_config(config, demo) {
        Ok(transport) => transport,
        Err(e) => {
            warn!(error = %e, "falling back to a default HTTP client");
            ClientTransport::Http(HttpTransport::new(config.api_base_url.clone()))
        }
    };
    if transport.is_demo() {
        info!("using the in-memory demo backend");
    } else {
        info!(base_url = %config.api_base_url, "using the HTTP backend");
    }
    StorefrontApi::new(transport)
}
