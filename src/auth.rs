//! Credential type and auth header names
//!
//! The API authenticates with two static request headers carrying the
//! principal identifier and secret key. Both are attached once at session
//! construction; anonymous sessions attach neither.

/// Header carrying the principal identifier
pub const API_USER_HEADER: &str = "Api-User";

/// Header carrying the secret key
pub const API_KEY_HEADER: &str = "Api-Key";

/// A resolved credential pair
///
/// Immutable once constructed. Resolution (config files, environment) is
/// the caller's concern; see [`crate::config`] for the file-based path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    user: String,
    api_key: String,
}

impl Credential {
    /// Create a credential from a principal identifier and secret key
    pub fn new(user: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            api_key: api_key.into(),
        }
    }

    /// The principal identifier
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The secret key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_accessors() {
        let auth = Credential::new("some.user", "abc123");
        assert_eq!(auth.user(), "some.user");
        assert_eq!(auth.api_key(), "abc123");
    }
}
