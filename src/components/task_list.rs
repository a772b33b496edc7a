//! Task List Component
//!
//! Renders the filtered tasks, or an empty-state message.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_todo_store, TodoStateStoreFields};
use crate::view::{empty_message, visible_tasks};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_todo_store();

    let visible = Memo::new(move |_| {
        let filter = store.filter().get();
        store.tasks().with(|tasks| visible_tasks(tasks, filter))
    });

    view! {
        <div class="task-list">
            <Show
                when=move || visible.with(|tasks| !tasks.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <div class="empty-icon">"✅"</div>
                        <p>{move || empty_message(store.filter().get())}</p>
                    </div>
                }
            >
                <ul>
                    // Keyed on completion too, so a toggled row re-renders
                    <For
                        each=move || visible.get()
                        key=|task| (task.id.clone(), task.completed)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>
        </div>
    }
}
