//! Auth Context
//!
//! Explicit credential holder with a defined lifecycle: populated by
//! the login call, read by the request path that attaches the bearer
//! header, cleared at logout. Shared by `Arc` with whatever needs it -
//! nothing reads credentials from ambient storage.

use std::sync::RwLock;

/// Bearer credential holder.
#[derive(Debug, Default)]
pub struct AuthContext {
    token: RwLock<Option<String>>,
}

impl AuthContext {
    /// Empty context (anonymous customer flows need no credential).
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context pre-populated with a persisted token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Store the credential returned by login.
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
    }

    /// Clear the credential at logout or expiry.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    /// Current bearer token, if any.
    pub fn bearer(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let auth = AuthContext::anonymous();
        assert!(!auth.is_authenticated());

        auth.set_token("staff-token");
        assert_eq!(auth.bearer().as_deref(), Some("staff-token"));

        auth.clear();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_with_token() {
        let auth = AuthContext::with_token("persisted");
        assert!(auth.is_authenticated());
    }
}
