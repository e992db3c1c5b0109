use chrono::{DateTime, Utc};
use rand::{distr::Alphanumeric, Rng};

use super::types::{AnonymousSession, SessionToken};

/// How long the backend honors an anonymous session and the lists bound
/// to it.
pub const SESSION_TTL_DAYS: i64 = 7;

const TOKEN_SUFFIX_LEN: usize = 24;

/// Generate a random anonymous session token, `anon_` followed by random
/// alphanumerics.
pub fn generate_session_token() -> SessionToken {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_SUFFIX_LEN)
        .map(char::from)
        .collect();
    SessionToken::new(format!("anon_{suffix}"))
}

/// Check if an anonymous session has expired.
pub fn is_session_expired(session: &AnonymousSession, now: DateTime<Utc>) -> bool {
    session.expires_at <= now
}

/// Days remaining until the session expires. Fractional days round up;
/// an expired session reports zero.
pub fn days_remaining(session: &AnonymousSession, now: DateTime<Utc>) -> i64 {
    let seconds = (session.expires_at - now).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    (seconds as u64).div_ceil(24 * 60 * 60) as i64
}
