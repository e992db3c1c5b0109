mod error;
mod events;
mod operations;
mod ordering;
mod reconcile;
mod requests;
mod types;

pub use error::{ListError, ValidationError};
pub use events::{DeletedItem, ItemChange};
pub use operations::{merge_visible_lists, remaining_count, validate_list, validate_title};
pub use ordering::{
    display_ordering, sort_items_by_created, sort_items_for_display, sort_lists_by_created,
};
pub use reconcile::{Applied, Reconciler};
pub use requests::{CreateItemRequest, CreateListRequest, UpdateItemRequest, UpdateListRequest};
pub use types::{TodoItem, TodoList};
