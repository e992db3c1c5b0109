mod functions;
mod types;

pub use functions::{days_remaining, generate_session_token, is_session_expired, SESSION_TTL_DAYS};
pub use types::{AnonymousSession, Caller, SessionToken};
