//! Data access for the storefront API
//!
//! Everything the client knows about the backend goes through [`Transport`],
//! a single `fetch_json` capability. [`StorefrontApi`] layers the typed calls
//! on top, so the wizard never sees raw JSON and never knows whether it is
//! talking to [`HttpTransport`] or [`DemoTransport`].

mod demo;
mod http;
mod types;

pub use demo::*;
pub use http::*;
pub use types::*;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::products::{Product, ProductListing};

/// Backend endpoints the client calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Check,
    Login,
    Verify,
    Register,
    Products,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Check => "/api/auth/check",
            Endpoint::Login => "/api/auth/login",
            Endpoint::Verify => "/api/auth/verify",
            Endpoint::Register => "/api/auth/register",
            Endpoint::Products => "/api/products",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Products => Method::GET,
            _ => Method::POST,
        }
    }
}

/// Fetch JSON from an endpoint.
///
/// `body` is `None` for GET endpoints. Implementations return the decoded
/// JSON body whenever the backend produced one, including application-level
/// rejections; only failures of the round trip itself are errors.
///
/// Futures are not required to be `Send`: the client runs on a single UI
/// thread and browser fetch futures are `!Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn fetch_json(&self, endpoint: Endpoint, body: Option<Value>) -> ClientResult<Value>;
}

/// Transport chosen at startup: the real backend or the in-memory demo
#[derive(Debug, Clone)]
pub enum ClientTransport {
    Http(HttpTransport),
    Demo(DemoTransport),
}

impl ClientTransport {
    pub fn from_config(config: &ClientConfig, demo: bool) -> ClientResult<Self> {
        if demo {
            Ok(ClientTransport::Demo(DemoTransport::new()))
        } else {
            Ok(ClientTransport::Http(HttpTransport::from_config(config)?))
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, ClientTransport::Demo(_))
    }
}

#[async_trait(?Send)]
impl Transport for ClientTransport {
    async fn fetch_json(&self, endpoint: Endpoint, body: Option<Value>) -> ClientResult<Value> {
        match self {
            ClientTransport::Http(transport) => transport.fetch_json(endpoint, body).await,
            ClientTransport::Demo(transport) => transport.fetch_json(endpoint, body).await,
        }
    }
}

/// Typed client for the storefront API
#[derive(Debug, Clone)]
pub struct StorefrontApi<T> {
    transport: T,
}

impl<T: Transport> StorefrontApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ask whether an account exists for an email or phone number
    pub async fn check(&self, email_or_phone: &str) -> ClientResult<CheckResponse> {
        self.post(
            Endpoint::Check,
            &CheckRequest {
                email_or_phone: email_or_phone.to_string(),
            },
        )
        .await
    }

    /// Sign in with a password
    pub async fn login(&self, email_or_phone: &str, password: &str) -> ClientResult<StatusResponse> {
        self.post(
            Endpoint::Login,
            &LoginRequest {
                email_or_phone: email_or_phone.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Confirm a one-time code
    pub async fn verify(&self, email_or_phone: &str, code: &str) -> ClientResult<StatusResponse> {
        self.post(
            Endpoint::Verify,
            &VerifyRequest {
                email_or_phone: email_or_phone.to_string(),
                code: code.to_string(),
            },
        )
        .await
    }

    /// Create an account after a successful verification
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<StatusResponse> {
        self.post(Endpoint::Register, request).await
    }

    /// Send any wizard request and normalize the answer
    pub async fn send(&self, request: &AuthRequest) -> ClientResult<AuthReply> {
        let endpoint = request.endpoint();
        let value = self
            .transport
            .fetch_json(endpoint, Some(request.to_json()?))
            .await?;

        let reply: AuthReply = match endpoint {
            Endpoint::Check => serde_json::from_value::<CheckResponse>(value)?.into(),
            _ => serde_json::from_value::<StatusResponse>(value)?.into(),
        };
        Ok(reply)
    }

    /// List the product catalog
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        debug!(endpoint = Endpoint::Products.path(), "fetching products");
        let value = self.transport.fetch_json(Endpoint::Products, None).await?;
        let listing: ProductListing = serde_json::from_value(value)?;
        Ok(listing.into_products())
    }

    async fn post<B, R>(&self, endpoint: Endpoint, body: &B) -> ClientResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let value = self
            .transport
            .fetch_json(endpoint, Some(serde_json::to_value(body)?))
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_methods() {
        assert_eq!(Endpoint::Products.method(), Method::GET);
        assert_eq!(Endpoint::Check.method(), Method::POST);
        assert_eq!(Endpoint::Register.path(), "/api/auth/register");
    }
}
