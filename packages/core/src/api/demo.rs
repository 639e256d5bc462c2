//! In-memory transport for offline use
//!
//! Answers the same endpoints as the real backend from a small fixed data set,
//! so the front ends can be driven without a server.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::{CheckRequest, Endpoint, LoginRequest, RegisterRequest, Transport, VerifyRequest};
use crate::error::{ClientError, ClientResult};

/// Code accepted by [`DemoTransport`] for every verification
pub const DEMO_VERIFICATION_CODE: &str = "123456";

#[derive(Debug)]
struct DemoState {
    /// identifier -> password; accounts created by registration have no password
    accounts: HashMap<String, Option<String>>,
    usernames: HashSet<String>,
    verified: HashSet<String>,
    products: Value,
    offline: bool,
}

/// Transport backed by an in-memory account store and product catalog
///
/// Clones share the same store.
#[derive(Debug, Clone)]
pub struct DemoTransport {
    state: Arc<Mutex<DemoState>>,
}

impl Default for DemoTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoTransport {
    pub fn new() -> Self {
        let accounts = HashMap::from([
            ("demo@example.com".to_string(), Some("password".to_string())),
            ("+15550100".to_string(), Some("password".to_string())),
        ]);

        Self {
            state: Arc::new(Mutex::new(DemoState {
                accounts,
                usernames: HashSet::from(["demo".to_string()]),
                verified: HashSet::new(),
                products: default_catalog(),
                offline: false,
            })),
        }
    }

    /// Make every subsequent call fail as if the network were down
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Replace the product catalog (the `items` array)
    pub fn set_products(&self, items: Value) {
        self.lock().products = items;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DemoState> {
        // A poisoned lock only means a previous caller panicked mid-update;
        // the maps are still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait(?Send)]
impl Transport for DemoTransport {
    async fn fetch_json(&self, endpoint: Endpoint, body: Option<Value>) -> ClientResult<Value> {
        let mut state = self.lock();
        if state.offline {
            return Err(ClientError::Unavailable("demo backend is offline".to_string()));
        }

        debug!(endpoint = endpoint.path(), "demo transport request");
        let body = body.unwrap_or(Value::Null);

        let reply = match endpoint {
            Endpoint::Check => {
                let request: CheckRequest = serde_json::from_value(body)?;
                let identifier = request.email_or_phone.trim();
                if state.accounts.contains_key(identifier) {
                    json!({ "exists": true, "message": "Welcome back! Enter your password." })
                } else {
                    json!({
                        "exists": false,
                        "message": format!("We sent a verification code to {identifier}."),
                    })
                }
            }
            Endpoint::Login => {
                let request: LoginRequest = serde_json::from_value(body)?;
                match state.accounts.get(request.email_or_phone.trim()) {
                    Some(Some(password)) if *password == request.password => {
                        json!({ "success": true, "message": "Signed in successfully." })
                    }
                    Some(_) => json!({ "success": false, "message": "Incorrect password." }),
                    None => json!({ "success": false, "message": "Account not found." }),
                }
            }
            Endpoint::Verify => {
                let request: VerifyRequest = serde_json::from_value(body)?;
                if request.code.trim() == DEMO_VERIFICATION_CODE {
                    state.verified.insert(request.email_or_phone.trim().to_string());
                    json!({ "success": true, "message": "Code verified." })
                } else {
                    json!({ "success": false, "message": "Invalid verification code." })
                }
            }
            Endpoint::Register => {
                let request: RegisterRequest = serde_json::from_value(body)?;
                register(&mut state, request)
            }
            Endpoint::Products => json!({ "items": state.products.clone() }),
        };

        Ok(reply)
    }
}

fn register(state: &mut DemoState, request: RegisterRequest) -> Value {
    let username = request.username.trim().to_string();
    let identifier = [request.email.trim(), request.phone.trim()]
        .into_iter()
        .find(|id| !id.is_empty())
        .map(str::to_string);

    let Some(identifier) = identifier else {
        return json!({ "success": false, "message": "An email or phone number is required." });
    };

    if request.code.trim() != DEMO_VERIFICATION_CODE || !state.verified.contains(&identifier) {
        return json!({ "success": false, "message": "Verification has expired. Start again." });
    }
    if username.is_empty() {
        return json!({ "success": false, "message": "A username is required." });
    }
    if !state.usernames.insert(username) {
        return json!({ "success": false, "message": "That username is already taken." });
    }

    state.verified.remove(&identifier);
    state.accounts.insert(identifier, None);
    json!({ "success": true, "message": "Your account has been created." })
}

fn default_catalog() -> Value {
    json!([
        {
            "id": "1",
            "name": "Ceramic Tea Set",
            "description": "Hand-glazed teapot with four cups",
            "price": 1850000,
            "stock_quantity": 12
        },
        {
            "id": "2",
            "name": "Wool Throw Blanket",
            "description": "Soft merino wool, 130 x 170 cm",
            "price": 2400000,
            "stock_quantity": 0
        },
        {
            "id": "3",
            "name": "Brass Desk Lamp",
            "description": "Adjustable arm with warm LED bulb",
            "price": 3150000,
            "stock_quantity": 4
        }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StorefrontApi;

    #[tokio::test]
    async fn test_known_account_exists() {
        let api = StorefrontApi::new(DemoTransport::new());
        let response = api.check("demo@example.com").await.unwrap();
        assert!(response.exists);

        let response = api.check("new@example.com").await.unwrap();
        assert!(!response.exists);
    }

    #[tokio::test]
    async fn test_login_checks_password() {
        let api = StorefrontApi::new(DemoTransport::new());
        assert!(api.login("demo@example.com", "password").await.unwrap().success);

        let wrong = api.login("demo@example.com", "nope").await.unwrap();
        assert!(!wrong.success);
        assert_eq!(wrong.message, "Incorrect password.");
    }

    #[tokio::test]
    async fn test_register_requires_verification() {
        let api = StorefrontApi::new(DemoTransport::new());
        let request = RegisterRequest {
            username: "sara".to_string(),
            email: "sara@example.com".to_string(),
            phone: String::new(),
            code: DEMO_VERIFICATION_CODE.to_string(),
        };

        assert!(!api.register(&request).await.unwrap().success);

        assert!(api
            .verify("sara@example.com", DEMO_VERIFICATION_CODE)
            .await
            .unwrap()
            .success);
        assert!(api.register(&request).await.unwrap().success);

        // Account now exists
        assert!(api.check("sara@example.com").await.unwrap().exists);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let api = StorefrontApi::new(DemoTransport::new());
        api.verify("+15559999", DEMO_VERIFICATION_CODE).await.unwrap();

        let response = api
            .register(&RegisterRequest {
                username: "demo".to_string(),
                email: String::new(),
                phone: "+15559999".to_string(),
                code: DEMO_VERIFICATION_CODE.to_string(),
            })
            .await
            .unwrap();
        assert!(!response.success);
        assert_eq!(response.message, "That username is already taken.");
    }

    #[tokio::test]
    async fn test_offline_fails_every_call() {
        let transport = DemoTransport::new();
        let api = StorefrontApi::new(transport.clone());
        transport.set_offline(true);

        assert!(matches!(
            api.check("demo@example.com").await,
            Err(ClientError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_catalog_includes_sold_out_item() {
        let api = StorefrontApi::new(DemoTransport::new());
        let products = api.products().await.unwrap();
        assert_eq!(products.len(), 3);
        assert!(products.iter().any(|p| p.stock_quantity == 0));
    }
}
