//! New Task Form Component
//!
//! Draft input; Enter or the Add button submits it.

use leptos::prelude::*;

use crate::config::INPUT_PLACEHOLDER;
use crate::store::{store_set_draft, store_submit_draft, use_todo_store, TodoStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_todo_store();

    let draft_is_blank = move || store.draft().with(|draft| draft.trim().is_empty());

    view! {
        <div class="new-task-form">
            <input
                type="text"
                placeholder=INPUT_PLACEHOLDER
                prop:value=move || store.draft().get()
                on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        store_submit_draft(&store);
                    }
                }
            />
            <button
                class="add-btn"
                disabled=draft_is_blank
                on:click=move |_| {
                    store_submit_draft(&store);
                }
            >
                "Add"
            </button>
        </div>
    }
}
