/// Kind of account identifier entered at the first wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Email,
    Phone,
}

impl IdentifierKind {
    /// Classify an identifier: anything containing `@` is an email, the rest are phone numbers.
    pub fn of(identifier: &str) -> Self {
        if identifier.contains('@') {
            IdentifierKind::Email
        } else {
            IdentifierKind::Phone
        }
    }

    /// Split an identifier into the `(email, phone)` pair the registration form expects.
    pub fn split(identifier: &str) -> (String, String) {
        match Self::of(identifier) {
            IdentifierKind::Email => (identifier.to_string(), String::new()),
            IdentifierKind::Phone => (String::new(), identifier.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_detection() {
        assert_eq!(IdentifierKind::of("user@example.com"), IdentifierKind::Email);
        assert_eq!(IdentifierKind::of("+989121234567"), IdentifierKind::Phone);
        assert_eq!(IdentifierKind::of("09121234567"), IdentifierKind::Phone);
    }

    #[test]
    fn test_split_fills_one_side() {
        assert_eq!(
            IdentifierKind::split("user@example.com"),
            ("user@example.com".to_string(), String::new())
        );
        assert_eq!(
            IdentifierKind::split("+15551234567"),
            (String::new(), "+15551234567".to_string())
        );
    }
}
