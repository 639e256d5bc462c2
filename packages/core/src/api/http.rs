//! HTTP transport backed by reqwest

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::{Endpoint, Transport};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Longest slice of a non-JSON error body kept in [`ClientError::Status`]
const MAX_ERROR_BODY: usize = 200;

/// Transport that talks to the real backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for a base URL such as `https://shop.example.com`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a transport from client configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.path().trim_start_matches('/')
        )
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn fetch_json(&self, endpoint: Endpoint, body: Option<Value>) -> ClientResult<Value> {
        let url = self.url_for(endpoint);
        debug!(method = %endpoint.method(), %url, "sending request");

        let mut request = self.client.request(endpoint.method(), &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        // Rejections such as a wrong password may come back with a 4xx status
        // and a regular JSON body; those are replies, not transport failures.
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(value),
            Err(e) if status.is_success() => Err(ClientError::Decode(e)),
            Err(_) => {
                warn!(status = status.as_u16(), %url, "non-JSON error response");
                Err(ClientError::Status {
                    status: status.as_u16(),
                    body: text.chars().take(MAX_ERROR_BODY).collect(),
                })
            }
        }
    }
}
