//! Reminders State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the persistence
//! effect subscribes to `tasks` only, so draft and filter edits never write.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Task};
use crate::storage::TaskRepository;
use crate::tasks;

/// Component state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Newest first
    pub tasks: Vec<Task>,
    /// In-progress new task text, never persisted
    pub draft: String,
    /// Current view selection, never persisted
    pub filter: Filter,
}

impl TodoState {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the reminders store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// List mutations go through `try_maybe_update`, so a no-op notifies nobody.

fn update_tasks(store: &TodoStore, fun: impl FnOnce(&mut Vec<Task>) -> bool) -> bool {
    store
        .tasks()
        .try_maybe_update(|list| {
            let changed = fun(list);
            (changed, changed)
        })
        .unwrap_or(false)
}

/// Submit the current draft; the draft is cleared only when a task was added
pub fn store_submit_draft(store: &TodoStore) -> bool {
    let text = store.draft().get_untracked();
    let added = update_tasks(store, |list| tasks::add_task(list, &text).is_some());
    if added {
        store.draft().set(String::new());
    }
    added
}

pub fn store_set_draft(store: &TodoStore, text: String) {
    store.draft().set(text);
}

pub fn store_set_filter(store: &TodoStore, filter: Filter) {
    store.filter().set(filter);
}

pub fn store_toggle_task(store: &TodoStore, id: &str) -> bool {
    update_tasks(store, |list| tasks::toggle_task(list, id))
}

pub fn store_delete_task(store: &TodoStore, id: &str) -> bool {
    update_tasks(store, |list| tasks::delete_task(list, id))
}

pub fn store_clear_completed(store: &TodoStore) -> bool {
    update_tasks(store, tasks::clear_completed)
}

/// Write the full list, logging instead of failing
pub fn persist_tasks(repo: &TaskRepository, tasks: &[Task]) {
    if let Err(error) = repo.save(tasks) {
        tracing::error!(%error, key = repo.key(), "failed to save reminders");
    }
}
