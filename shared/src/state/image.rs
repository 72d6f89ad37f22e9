//! Image source slot.
//!
//! The image field is fed either by typed URL text or by a dropped/picked file.
//! Files become `blob:` object URLs, which the browser keeps alive until they are
//! revoked. The slot owns at most one such URL and revokes it whenever the field
//! moves on to something else.

use serde::{Deserialize, Serialize};

use crate::error::MintError;

/// Release side of the browser's object URL registry.
pub trait ObjectUrlRevoker {
    fn revoke(&self, url: &str);
}

/// Revoker for slots that never hold transient URLs (typed URLs only, doc examples).
pub struct NoopRevoker;

impl ObjectUrlRevoker for NoopRevoker {
    fn revoke(&self, _url: &str) {}
}

/// Only the `image/*` MIME class is accepted from files.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Where the current image came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum ImageSource {
    Url(String),
    Transient(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSlot {
    source: Option<ImageSource>,
}

impl ImageSlot {
    /// Text shown in the image URL input and sent to the contract.
    pub fn value(&self) -> &str {
        match &self.source {
            Some(ImageSource::Url(url)) | Some(ImageSource::Transient(url)) => url,
            None => "",
        }
    }

    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    /// The object URL currently owned by the slot, if any.
    pub fn transient(&self) -> Option<&str> {
        match &self.source {
            Some(ImageSource::Transient(url)) => Some(url),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value().trim().is_empty()
    }

    /// Replace the field with typed text. Empty text clears the slot.
    pub fn set_url(&mut self, text: &str, revoker: &impl ObjectUrlRevoker) {
        if self.transient() == Some(text) {
            return;
        }
        self.release(revoker);
        if !text.is_empty() {
            self.source = Some(ImageSource::Url(text.to_string()));
        }
    }

    /// Adopt a freshly created object URL, revoking the one it supersedes.
    pub fn set_transient(&mut self, url: String, revoker: &impl ObjectUrlRevoker) {
        self.release(revoker);
        log::debug!("image slot adopted {}", url);
        self.source = Some(ImageSource::Transient(url));
    }

    /// Validate a file's MIME type, then create and adopt its object URL.
    ///
    /// `create_url` only runs for image files, so a rejected file never allocates
    /// an object URL and never touches the field.
    pub fn select_file<F>(
        &mut self,
        mime: &str,
        create_url: F,
        revoker: &impl ObjectUrlRevoker,
    ) -> Result<(), MintError>
    where
        F: FnOnce() -> Result<String, String>,
    {
        if !is_image_mime(mime) {
            return Err(MintError::NotAnImage);
        }
        let url = create_url().map_err(MintError::ImageUnreadable)?;
        self.set_transient(url, revoker);
        Ok(())
    }

    /// Empty the slot, revoking any owned object URL.
    pub fn release(&mut self, revoker: &impl ObjectUrlRevoker) {
        if let Some(ImageSource::Transient(url)) = self.source.take() {
            log::debug!("image slot revoked {}", url);
            revoker.revoke(&url);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every revoked URL.
    #[derive(Default)]
    pub(crate) struct RecordingRevoker {
        pub revoked: RefCell<Vec<String>>,
    }

    impl ObjectUrlRevoker for RecordingRevoker {
        fn revoke(&self, url: &str) {
            self.revoked.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime(""));
        assert!(!is_image_mime("application/image"));
    }

    #[test]
    fn test_successive_files_release_previous() {
        let revoker = RecordingRevoker::default();
        let mut slot = ImageSlot::default();

        for i in 0..10 {
            slot.set_transient(format!("blob:local/{i}"), &revoker);
            assert_eq!(revoker.revoked.borrow().len(), i);
        }

        let revoked = revoker.revoked.borrow();
        let expected: Vec<String> = (0..9).map(|i| format!("blob:local/{i}")).collect();
        assert_eq!(*revoked, expected);
        assert_eq!(slot.transient(), Some("blob:local/9"));
    }

    #[test]
    fn test_non_image_file_is_rejected_without_allocating() {
        let revoker = RecordingRevoker::default();
        let mut slot = ImageSlot::default();
        slot.set_url("https://x/y.png", &revoker);

        let mut created = false;
        let result = slot.select_file(
            "text/plain",
            || {
                created = true;
                Ok("blob:local/txt".to_string())
            },
            &revoker,
        );

        assert_eq!(result, Err(MintError::NotAnImage));
        assert!(!created);
        assert_eq!(slot.value(), "https://x/y.png");
    }

    #[test]
    fn test_typed_url_releases_transient() {
        let revoker = RecordingRevoker::default();
        let mut slot = ImageSlot::default();
        slot.set_transient("blob:local/1".to_string(), &revoker);

        slot.set_url("https://x/y.png", &revoker);
        assert_eq!(*revoker.revoked.borrow(), vec!["blob:local/1".to_string()]);
        assert_eq!(slot.source(), Some(&ImageSource::Url("https://x/y.png".to_string())));
    }

    #[test]
    fn test_typing_same_transient_keeps_it() {
        let revoker = RecordingRevoker::default();
        let mut slot = ImageSlot::default();
        slot.set_transient("blob:local/1".to_string(), &revoker);

        slot.set_url("blob:local/1", &revoker);
        assert!(revoker.revoked.borrow().is_empty());
        assert_eq!(slot.transient(), Some("blob:local/1"));
    }

    #[test]
    fn test_unreadable_file_keeps_previous() {
        let revoker = RecordingRevoker::default();
        let mut slot = ImageSlot::default();
        slot.set_transient("blob:local/1".to_string(), &revoker);

        let result = slot.select_file("image/png", || Err("quota".to_string()), &revoker);
        assert_eq!(result, Err(MintError::ImageUnreadable("quota".to_string())));
        assert_eq!(slot.transient(), Some("blob:local/1"));
        assert!(revoker.revoked.borrow().is_empty());
    }

    #[test]
    fn test_blank_detection() {
        let mut slot = ImageSlot::default();
        assert!(slot.is_blank());
        slot.set_url("   ", &NoopRevoker);
        assert!(slot.is_blank());
        assert_eq!(slot.value(), "   ");
    }
}
