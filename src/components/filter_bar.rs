//! Filter Bar Component
//!
//! Three mutually exclusive filter pills.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{store_set_filter, use_todo_store, TodoStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || store.filter().get() == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-pill active" } else { "filter-pill" }
                        on:click=move |_| store_set_filter(&store, filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
