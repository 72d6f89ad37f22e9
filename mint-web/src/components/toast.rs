//! Toast notification view

use leptos::prelude::*;

use crate::state::page::use_page_context;

#[component]
pub fn ToastView() -> impl IntoView {
    let page = use_page_context();

    move || {
        page.state
            .with(|s| s.toast.current().cloned())
            .map(|toast| view! {
                <div class=format!("toast {}", toast.kind.class()) role="status">
                    <span>{toast.message}</span>
                </div>
            })
    }
}
