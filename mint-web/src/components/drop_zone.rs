//! Drag-and-drop / click-to-browse image picker

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, Event, HtmlInputElement, KeyboardEvent};

use crate::state::page::use_page_context;

#[component]
pub fn DropZone() -> impl IntoView {
    let page = use_page_context();
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let open_picker = move || {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        page.select_file(file);
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        page.set_drag_active(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        page.set_drag_active(false);
    };

    let on_change = move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        page.select_file(input.files().and_then(|files| files.get(0)));
        // Let the same file be picked again.
        input.set_value("");
    };

    let zone_class = move || {
        if page.state.with(|s| s.flags.drag_active) {
            "drop-zone dragover"
        } else {
            "drop-zone"
        }
    };

    view! {
        <div
            class=zone_class
            role="button"
            tabindex="0"
            on:drop=on_drop
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:click=move |_| open_picker()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    open_picker();
                }
            }
        >
            <p>"📂 Drag & drop an image here, or " <span class="browse">"click to browse"</span></p>
            <input
                node_ref=file_input
                id="fileUpload"
                type="file"
                accept="image/*"
                style="display: none;"
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
