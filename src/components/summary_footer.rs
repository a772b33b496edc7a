//! Summary Footer Component
//!
//! Remaining count and the clear-completed action. Hidden when the list is empty.

use leptos::prelude::*;

use crate::store::{store_clear_completed, use_todo_store, TodoStateStoreFields};
use crate::view::{remaining_label, TaskCounts};

#[component]
pub fn SummaryFooter() -> impl IntoView {
    let store = use_todo_store();

    let counts = Memo::new(move |_| store.tasks().with(|tasks| TaskCounts::from_tasks(tasks)));

    view! {
        <Show when=move || !counts.get().is_empty()>
            <div class="summary-footer">
                <span>{move || remaining_label(counts.get())}</span>
                <Show when=move || counts.get().has_completed()>
                    <button
                        class="clear-completed-btn"
                        on:click=move |_| {
                            store_clear_completed(&store);
                        }
                    >
                        "Clear completed"
                    </button>
                </Show>
            </div>
        </Show>
    }
}
