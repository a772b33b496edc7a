//! Task Row Component
//!
//! One reminder: completion toggle, text, and a delete button revealed on hover/focus.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{store_delete_task, store_toggle_task, use_todo_store};

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_todo_store();

    let completed = task.completed;
    let toggle_id = task.id.clone();
    let delete_id = task.id;

    view! {
        <li class=if completed { "task-row completed" } else { "task-row" }>
            <button
                class=if completed { "task-check checked" } else { "task-check" }
                title=if completed { "Mark as not done" } else { "Mark as done" }
                on:click=move |_| {
                    store_toggle_task(&store, &toggle_id);
                }
            >
                {completed.then(|| "✓")}
            </button>

            <span class="task-text">{task.text}</span>

            <button
                class="delete-btn"
                title="Delete"
                on:click=move |_| {
                    store_delete_task(&store, &delete_id);
                }
            >
                "×"
            </button>
        </li>
    }
}
