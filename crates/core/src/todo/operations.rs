use std::collections::HashSet;

use super::error::{ListError, ValidationError};
use super::ordering::sort_lists_by_created;
use super::types::{TodoItem, TodoList};

/// Validates a list or item title before creation or update.
/// Titles must be non-empty after trimming.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.len() > 200 {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

/// Validates a todo list record's session binding: anonymous lists carry a
/// session token and expiration, non-anonymous lists carry neither.
pub fn validate_list(list: &TodoList) -> Result<(), ListError> {
    if list.is_anonymous {
        if list.session_id.is_none() || list.expires_at.is_none() {
            return Err(ListError::MissingSessionBinding);
        }
    } else if list.session_id.is_some() || list.expires_at.is_some() {
        return Err(ListError::UnexpectedSessionBinding);
    }
    Ok(())
}

/// Merges the caller's own lists with the public ones into a single view:
/// duplicates dropped by id (own lists win), newest creation time first.
pub fn merge_visible_lists(own: Vec<TodoList>, public: Vec<TodoList>) -> Vec<TodoList> {
    let mut seen = HashSet::new();
    let mut merged: Vec<TodoList> = own
        .into_iter()
        .chain(public)
        .filter(|list| seen.insert(list.id))
        .collect();
    sort_lists_by_created(&mut merged);
    merged
}

/// Counts the items still left to do.
pub fn remaining_count(items: &[TodoItem]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}
