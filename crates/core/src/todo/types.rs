use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::SessionToken;

/// A named todo list owned by a user or an anonymous session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: Uuid,
    pub title: String,
    /// Owning user; absent for anonymous lists.
    pub user_id: Option<Uuid>,
    pub is_public: bool,
    pub is_anonymous: bool,
    /// Owning session for anonymous lists; always paired with `expires_at`.
    pub session_id: Option<SessionToken>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TodoList {
    /// Creates a list owned by a signed-in user. New lists start public.
    pub fn owned(title: impl Into<String>, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            user_id: Some(user_id),
            is_public: true,
            is_anonymous: false,
            session_id: None,
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    /// Creates a list owned by an anonymous session, expiring with it.
    pub fn anonymous(
        title: impl Into<String>,
        session: SessionToken,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            user_id: None,
            is_public: true,
            is_anonymous: true,
            session_id: Some(session),
            expires_at: Some(expires_at),
            created_at: Utc::now(),
        }
    }

    /// Sets the visibility flag.
    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Sets a specific ID for this list (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets a specific creation time (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Returns true if this list's expiration has passed.
    /// Lists without an expiration never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// A single todo item belonging to one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub todo_list_id: Uuid,
    /// Creating user; absent for anonymous and public creators.
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates an incomplete item under the given list.
    pub fn new(todo_list_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            todo_list_id,
            user_id: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the creating user.
    pub fn with_owner(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sets a specific ID for this item (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets a specific creation time (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_owned_list_carries_no_session_binding() {
        let user_id = Uuid::new_v4();
        let list = TodoList::owned("Groceries", user_id);

        assert_eq!(list.user_id, Some(user_id));
        assert!(!list.is_anonymous);
        assert!(list.session_id.is_none());
        assert!(list.expires_at.is_none());
        assert!(list.is_public);
    }

    #[test]
    fn test_anonymous_list_carries_session_and_expiry() {
        let token = SessionToken::new("anon_abc123");
        let expires = Utc::now() + Duration::days(7);
        let list = TodoList::anonymous("Trip", token.clone(), expires);

        assert!(list.is_anonymous);
        assert!(list.user_id.is_none());
        assert_eq!(list.session_id, Some(token));
        assert_eq!(list.expires_at, Some(expires));
    }

    #[test]
    fn test_list_is_expired() {
        let now = Utc::now();
        let token = SessionToken::new("anon_abc123");

        let expired = TodoList::anonymous("Old", token.clone(), now - Duration::hours(1));
        assert!(expired.is_expired(now));

        let at_boundary = TodoList::anonymous("Edge", token.clone(), now);
        assert!(at_boundary.is_expired(now));

        let fresh = TodoList::anonymous("New", token, now + Duration::hours(1));
        assert!(!fresh.is_expired(now));

        let owned = TodoList::owned("Forever", Uuid::new_v4());
        assert!(!owned.is_expired(now));
    }

    #[test]
    fn test_item_starts_incomplete() {
        let list_id = Uuid::new_v4();
        let item = TodoItem::new(list_id, "Buy milk");

        assert!(!item.completed);
        assert_eq!(item.todo_list_id, list_id);
        assert!(item.user_id.is_none());
    }

    #[test]
    fn test_item_builders() {
        let list_id = Uuid::new_v4();
        let item_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let created = Utc::now() - Duration::days(1);

        let item = TodoItem::new(list_id, "Buy milk")
            .with_id(item_id)
            .with_owner(user_id)
            .with_completed(true)
            .with_created_at(created);

        assert_eq!(item.id, item_id);
        assert_eq!(item.user_id, Some(user_id));
        assert!(item.completed);
        assert_eq!(item.created_at, created);
    }
}
