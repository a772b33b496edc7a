//! Reminders App
//!
//! The reminders component and the desktop shell hosting it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, NewTaskForm, SummaryFooter, TaskList, TitleBar};
use crate::config::APP_TITLE;
use crate::storage::TaskRepository;
use crate::store::{persist_tasks, TodoState, TodoStateStoreFields, TodoStore};

/// Reminders widget
///
/// Loads the stored list once on mount and writes the full list back
/// whenever it changes. `on_close` is called when the user dismisses it.
#[component]
pub fn Reminders(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let repo = TaskRepository::browser();
    let store: TodoStore = Store::new(TodoState::with_tasks(repo.load()));
    provide_context(store);

    // Tracks `tasks` only; draft and filter edits never reach storage
    Effect::new(move |_| {
        store.tasks().with(|tasks| persist_tasks(&repo, tasks));
    });

    view! {
        <div class="reminders-app">
            <header class="reminders-header">
                <TitleBar on_close=on_close />
                <FilterBar />
            </header>
            <NewTaskForm />
            <TaskList />
            <SummaryFooter />
        </div>
    }
}

/// Minimal desktop shell: a window for the widget and a launcher to reopen it
#[component]
pub fn App() -> impl IntoView {
    let (open, set_open) = signal(true);

    view! {
        <div class="desktop">
            <Show
                when=move || open.get()
                fallback=move || view! {
                    <button class="dock-launcher" on:click=move |_| set_open.set(true)>
                        {APP_TITLE}
                    </button>
                }
            >
                <div class="desktop-window">
                    <Reminders on_close=move |_| set_open.set(false) />
                </div>
            </Show>
        </div>
    }
}
