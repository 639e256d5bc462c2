//! Signed-in marker for the page header
//!
//! Only tracks who the header should greet. Tokens and persistence belong to
//! the backend.

use tracing::info;

const DEFAULT_DISPLAY_NAME: &str = "Account";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn sign_in(&mut self, display_name: &str) {
        let name = display_name.trim();
        let name = if name.is_empty() {
            DEFAULT_DISPLAY_NAME
        } else {
            name
        };
        info!(user = name, "signed in");
        self.user = Some(name.to_string());
    }

    /// Clear the session, returning the message to show the user
    pub fn sign_out(&mut self) -> &'static str {
        if let Some(user) = self.user.take() {
            info!(user = %user, "signed out");
        }
        "Signed out successfully"
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Text for the header's login button
    pub fn label(&self) -> &str {
        self.user.as_deref().unwrap_or("Sign in")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let mut session = Session::default();
        assert_eq!(session.label(), "Sign in");

        session.sign_in("sara");
        assert!(session.is_authenticated());
        assert_eq!(session.label(), "sara");

        assert_eq!(session.sign_out(), "Signed out successfully");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_blank_name_uses_default() {
        let mut session = Session::default();
        session.sign_in("  ");
        assert_eq!(session.user(), Some("Account"));
    }
}
