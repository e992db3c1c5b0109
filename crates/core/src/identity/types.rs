use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::functions::SESSION_TTL_DAYS;

/// Client-generated token identifying an anonymous session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity a store operation runs as.
///
/// Every store operation takes the caller explicitly; there is no ambient
/// current-user lookup anywhere. The store implementation attaches the
/// matching credential to its requests, never the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// A signed-in user with a stable id.
    User(Uuid),
    /// An anonymous session identified by its token.
    Anonymous(SessionToken),
    /// No identity; sees public lists only.
    Public,
}

impl Caller {
    /// The signed-in user id, if any.
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Caller::User(id) => Some(*id),
            _ => None,
        }
    }

    /// The anonymous session token, if any.
    pub fn session_token(&self) -> Option<&SessionToken> {
        match self {
            Caller::Anonymous(token) => Some(token),
            _ => None,
        }
    }

    /// Returns true if the caller carries no credential at all.
    pub fn is_public(&self) -> bool {
        matches!(self, Caller::Public)
    }
}

/// An anonymous session: a client-generated token plus the window the
/// backend will honor it for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymousSession {
    pub token: SessionToken,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AnonymousSession {
    /// Starts a fresh session at `now`, expiring [`SESSION_TTL_DAYS`] later.
    pub fn start(now: DateTime<Utc>) -> Self {
        Self {
            token: super::functions::generate_session_token(),
            created_at: now,
            expires_at: now + Duration::days(SESSION_TTL_DAYS),
        }
    }

    /// The caller identity this session stands in for.
    pub fn caller(&self) -> Caller {
        Caller::Anonymous(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_accessors() {
        let user_id = Uuid::new_v4();
        let token = SessionToken::new("anon_abc");

        let user = Caller::User(user_id);
        assert_eq!(user.user_id(), Some(user_id));
        assert!(user.session_token().is_none());
        assert!(!user.is_public());

        let anonymous = Caller::Anonymous(token.clone());
        assert!(anonymous.user_id().is_none());
        assert_eq!(anonymous.session_token(), Some(&token));
        assert!(!anonymous.is_public());

        assert!(Caller::Public.is_public());
    }

    #[test]
    fn test_session_start_spans_the_ttl() {
        let now = Utc::now();
        let session = AnonymousSession::start(now);

        assert_eq!(session.created_at, now);
        assert_eq!(session.expires_at, now + Duration::days(SESSION_TTL_DAYS));
        assert_eq!(session.caller(), Caller::Anonymous(session.token.clone()));
    }

    #[test]
    fn test_session_token_display() {
        let token = SessionToken::new("anon_abc123");
        assert_eq!(token.to_string(), "anon_abc123");
        assert_eq!(token.as_str(), "anon_abc123");
    }
}
