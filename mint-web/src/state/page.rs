//! Page state context
//!
//! Wraps [`MintPageState`] in a signal and owns the two side effects the state
//! record cannot: the toast dismissal timer and the `<body>` theme class.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::File;

use shared::error::MintError;
use shared::executor::PageStore;
use shared::state::{MintPageState, ToastKind, ToastTicket};

use crate::services::object_url::{create_for_file, BrowserObjectUrls};
use crate::utils::constants::THEME_DARK_CLASS;

#[derive(Clone, Copy)]
pub struct PageContext {
    pub state: RwSignal<MintPageState>,
    // The one armed dismissal. Replacing it drops, and thereby cancels, the old one.
    dismiss_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl PageContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(MintPageState::new()),
            dismiss_timer: StoredValue::new_local(None),
        }
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        self.state.update(|page| {
            page.notify(kind, message);
        });
    }

    pub fn report_copy(&self, result: Result<(), MintError>) {
        self.state.update(|page| {
            page.report_copy(result);
        });
    }

    pub fn set_package_id(&self, value: String) {
        self.state.update(|page| page.set_package_id(value));
    }

    pub fn set_customer_address(&self, value: String) {
        self.state.update(|page| page.set_customer_address(value));
    }

    pub fn set_image_url(&self, text: String) {
        self.state.update(|page| page.set_image_url(&text, &BrowserObjectUrls));
    }

    /// Adopt the first file of a drop or picker selection.
    pub fn select_file(&self, file: Option<File>) {
        let mime = file.as_ref().map(|f| f.type_());
        self.state.update(|page| {
            page.set_drag_active(false);
            let create = || match &file {
                Some(file) => create_for_file(file),
                None => Err("no file".to_string()),
            };
            if let Err(err) = page.select_image_file(mime.as_deref(), create, &BrowserObjectUrls) {
                log::warn!("Image rejected: {}", err);
            }
        });
    }

    pub fn set_drag_active(&self, active: bool) {
        // Drag events fire continuously; skip redundant writes.
        if self.state.with_untracked(|page| page.flags.drag_active) != active {
            self.state.update(|page| page.set_drag_active(active));
        }
    }

    pub fn toggle_theme(&self) {
        self.state.update(|page| {
            page.toggle_theme();
        });
    }

    fn arm_dismissal(&self, ticket: Option<ToastTicket>) {
        let state = self.state;
        let duration = state.with_untracked(|page| page.config.toast_duration_ms);
        let timer = ticket.map(|ticket| {
            Timeout::new(duration, move || {
                state.try_update(|page| page.toast.expire(ticket));
            })
        });
        self.dismiss_timer.set_value(timer);
    }
}

impl PageStore for PageContext {
    fn update_page<R>(&self, f: impl FnOnce(&mut MintPageState) -> R) -> Option<R> {
        self.state.try_update(f)
    }
}

pub fn provide_page_context() -> PageContext {
    let context = PageContext::new();
    let state = context.state;

    // Only a new ticket re-arms the timer; keystrokes elsewhere in the state must not.
    let pending = Memo::new(move |_| state.with(|page| page.toast.pending()));
    Effect::new(move || context.arm_dismissal(pending.get()));

    let dark_mode = Memo::new(move |_| state.with(|page| page.flags.dark_mode));
    Effect::new(move || {
        let body = gloo_utils::body();
        if let Err(e) = body.class_list().toggle_with_force(THEME_DARK_CLASS, dark_mode.get()) {
            log::warn!("Failed to toggle theme class: {:?}", e);
        }
    });

    // The root owner is never disposed, so release object URLs when the page is hidden.
    let pagehide = window_event_listener(leptos::ev::pagehide, move |_| {
        state.try_update(|page| page.teardown(&BrowserObjectUrls));
    });
    on_cleanup(move || pagehide.remove());

    provide_context(context);
    context
}

pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
