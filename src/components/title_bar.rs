//! Title Bar Component
//!
//! Component title with the close control handed in by the host shell.

use leptos::prelude::*;

use crate::config::APP_TITLE;

#[component]
pub fn TitleBar(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="reminders-titlebar">
            <h1 class="reminders-title">{APP_TITLE}</h1>
            <button
                class="titlebar-btn close"
                title="Close"
                on:click=move |_| on_close.run(())
            >
                "✕"
            </button>
        </div>
    }
}
