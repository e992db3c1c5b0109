//! Pretty output formatting.

use chrono::Utc;

use memora_core::identity::{days_remaining, AnonymousSession};
use memora_core::todo::{remaining_count, TodoItem, TodoList};

/// Format a list for display.
pub fn format_list(list: &TodoList) -> String {
    let visibility = if list.is_public { "public" } else { "private" };
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Created: {}",
        list.title,
        visibility,
        list.id,
        list.created_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(expires_at) = list.expires_at {
        output.push_str(&format!(
            "\n  Expires: {}",
            expires_at.format("%Y-%m-%d %H:%M")
        ));
    }
    output
}

/// Format lists for display.
pub fn format_lists(lists: &[TodoList]) -> String {
    if lists.is_empty() {
        return "No lists found.".to_string();
    }
    let mut output = format!("LISTS ({})\n", lists.len());
    output.push_str(&"-".repeat(40));
    for list in lists {
        output.push_str(&format!("\n{}", format_list(list)));
        output.push('\n');
    }
    output
}

/// Format an item for display.
pub fn format_item(item: &TodoItem) -> String {
    let mark = if item.completed { "x" } else { " " };
    format!("[{}] {}\n  ID: {}", mark, item.title, item.id)
}

/// Format items for display, closing with the remaining-count footer.
pub fn format_items(items: &[TodoItem]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output.push_str(&format!(
        "\nYour remaining todos: {}",
        remaining_count(items)
    ));
    output
}

/// Format the stored session for display.
pub fn format_session(session: &AnonymousSession) -> String {
    let remaining = days_remaining(session, Utc::now());
    let standing = if remaining > 0 {
        format!("{} day(s) remaining", remaining)
    } else {
        "expired".to_string()
    };
    format!(
        "{}\n  Created: {}\n  Expires: {} ({})",
        session.token,
        session.created_at.format("%Y-%m-%d %H:%M"),
        session.expires_at.format("%Y-%m-%d %H:%M"),
        standing
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use memora_core::identity::SessionToken;
    use uuid::Uuid;

    #[test]
    fn test_empty_collections() {
        assert_eq!(format_lists(&[]), "No lists found.");
        assert_eq!(format_items(&[]), "No items found.");
    }

    #[test]
    fn test_items_carry_the_remaining_footer() {
        let list_id = Uuid::new_v4();
        let items = vec![
            TodoItem::new(list_id, "Milk"),
            TodoItem::new(list_id, "Eggs").with_completed(true),
        ];

        let output = format_items(&items);

        assert!(output.contains("[ ] Milk"));
        assert!(output.contains("[x] Eggs"));
        assert!(output.ends_with("Your remaining todos: 1"));
    }

    #[test]
    fn test_list_shows_visibility_and_expiry() {
        let public = TodoList::owned("Groceries", Uuid::new_v4());
        assert!(format_list(&public).contains("[public]"));
        assert!(!format_list(&public).contains("Expires"));

        let anonymous = TodoList::anonymous(
            "Trip",
            SessionToken::new("anon_abc"),
            Utc::now() + Duration::days(7),
        )
        .with_public(false);
        let output = format_list(&anonymous);
        assert!(output.contains("[private]"));
        assert!(output.contains("Expires"));
    }

    #[test]
    fn test_session_reports_days_remaining() {
        let live = AnonymousSession::start(Utc::now());
        assert!(format_session(&live).contains("day(s) remaining"));

        let expired = AnonymousSession::start(Utc::now() - Duration::days(30));
        assert!(format_session(&expired).contains("expired"));
    }
}
