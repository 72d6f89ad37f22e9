//! Page state: form fields, image ownership, toast slot and UI flags.

pub mod form;
pub mod image;
pub mod page;
pub mod toast;

pub use form::MintForm;
pub use image::{is_image_mime, ImageSlot, ImageSource, NoopRevoker, ObjectUrlRevoker};
pub use page::{MintOutcome, MintPageState, PageConfig, UiFlags};
pub use toast::{Toast, ToastKind, ToastSlot, ToastTicket};
