//! Wire types for the storefront API
//!
//! Request and response bodies mirror the JSON the backend speaks, field for field.

use serde::{Deserialize, Serialize};

use super::Endpoint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub email_or_phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email_or_phone: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub email_or_phone: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub code: String,
}

/// Response of `/api/auth/check`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    pub exists: bool,
    #[serde(default)]
    pub message: String,
}

/// Response of login, verify and register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// One of the four wizard calls, ready to send
#[derive(Debug, Clone, PartialEq)]
pub enum AuthRequest {
    Check(CheckRequest),
    Login(LoginRequest),
    Verify(VerifyRequest),
    Register(RegisterRequest),
}

impl AuthRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            AuthRequest::Check(_) => Endpoint::Check,
            AuthRequest::Login(_) => Endpoint::Login,
            AuthRequest::Verify(_) => Endpoint::Verify,
            AuthRequest::Register(_) => Endpoint::Register,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            AuthRequest::Check(body) => serde_json::to_value(body),
            AuthRequest::Login(body) => serde_json::to_value(body),
            AuthRequest::Verify(body) => serde_json::to_value(body),
            AuthRequest::Register(body) => serde_json::to_value(body),
        }
    }
}

/// Normalized answer to an [`AuthRequest`]
///
/// `accepted` is `exists` for a check and `success` for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthReply {
    pub accepted: bool,
    pub message: String,
}

impl From<CheckResponse> for AuthReply {
    fn from(response: CheckResponse) -> Self {
        Self {
            accepted: response.exists,
            message: response.message,
        }
    }
}

impl From<StatusResponse> for AuthReply {
    fn from(response: StatusResponse) -> Self {
        Self {
            accepted: response.success,
            message: response.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_request_field_names() {
        let request = AuthRequest::Check(CheckRequest {
            email_or_phone: "user@example.com".to_string(),
        });
        assert_eq!(
            request.to_json().unwrap(),
            json!({ "email_or_phone": "user@example.com" })
        );
        assert_eq!(request.endpoint(), Endpoint::Check);
    }

    #[test]
    fn test_register_request_field_names() {
        let request = AuthRequest::Register(RegisterRequest {
            username: "sara".to_string(),
            email: String::new(),
            phone: "+15551234567".to_string(),
            code: "123456".to_string(),
        });
        assert_eq!(
            request.to_json().unwrap(),
            json!({
                "username": "sara",
                "email": "",
                "phone": "+15551234567",
                "code": "123456"
            })
        );
    }

    #[test]
    fn test_missing_message_defaults_to_empty() {
        let response: StatusResponse = serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(response.message, "");
        assert!(!AuthReply::from(response).accepted);
    }

    #[test]
    fn test_missing_flag_is_rejected() {
        let result = serde_json::from_value::<CheckResponse>(json!({ "message": "hi" }));
        assert!(result.is_err());
    }
}
