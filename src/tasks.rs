//! Task List Operations
//!
//! Mutations over the ordered task list. Each returns whether the list changed,
//! so callers can skip notification and persistence for no-ops.

use crate::models::Task;

/// Prepend a new task built from `text`
///
/// Returns the new task's id, or `None` when the trimmed text is empty.
pub fn add_task(tasks: &mut Vec<Task>, text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let task = Task::create(text.to_string());
    let id = task.id.clone();
    tasks.insert(0, task);
    tracing::debug!(%id, total = tasks.len(), "added task");
    Some(id)
}

/// Flip the completed flag of the task with `id`
pub fn toggle_task(tasks: &mut [Task], id: &str) -> bool {
    match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            tracing::debug!(%id, completed = task.completed, "toggled task");
            true
        }
        None => false,
    }
}

/// Remove the task with `id`
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    let removed = tasks.len() != before;
    if removed {
        tracing::debug!(%id, total = tasks.len(), "deleted task");
    }
    removed
}

/// Remove every completed task in one step
pub fn clear_completed(tasks: &mut Vec<Task>) -> bool {
    let before = tasks.len();
    tasks.retain(|task| !task.completed);
    let cleared = before - tasks.len();
    if cleared > 0 {
        tracing::debug!(cleared, total = tasks.len(), "cleared completed tasks");
    }
    cleared > 0
}
