//! Text input with a copy-to-clipboard button

use leptos::prelude::*;

use crate::services::clipboard::copy_text;
use crate::state::page::use_page_context;

#[component]
pub fn CopyField(
    id: &'static str,
    placeholder: &'static str,
    /// Accessible name of the copy button
    copy_label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let page = use_page_context();

    let copy = move |_| {
        let text = value.get_untracked();
        leptos::task::spawn_local(async move {
            page.report_copy(copy_text(&text).await);
        });
    };

    view! {
        <div class="copy-row">
            <input
                id=id
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button type="button" class="icon-btn" aria-label=copy_label title="Copy" on:click=copy>
                "📋"
            </button>
        </div>
    }
}
