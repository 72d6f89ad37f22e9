//! Single-slot toast notification.
//!
//! `Hidden -> Visible(toast, ticket) -> Hidden`. Every `show` issues a new
//! [`ToastTicket`]; a scheduled dismissal carries the ticket it was armed for and
//! only hides the toast if that ticket is still the pending one. The browser side
//! keeps one timer keyed on [`ToastSlot::pending`] and drops the old timer when
//! the ticket changes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class.
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Identifies one showing of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastSlot {
    current: Option<Toast>,
    generation: u64,
}

impl ToastSlot {
    /// Show a toast, replacing whatever is visible.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastTicket {
        self.generation += 1;
        self.current = Some(Toast {
            kind,
            message: message.into(),
        });
        ToastTicket(self.generation)
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastTicket {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastTicket {
        self.show(ToastKind::Error, message)
    }

    /// Ticket of the visible toast, i.e. the only dismissal that may fire.
    pub fn pending(&self) -> Option<ToastTicket> {
        self.current.as_ref().map(|_| ToastTicket(self.generation))
    }

    /// Timer callback. Returns `true` if the toast was hidden.
    pub fn expire(&mut self, ticket: ToastTicket) -> bool {
        if self.pending() == Some(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
