//! UI Components

pub mod connect_button;
pub mod copy_field;
pub mod drop_zone;
pub mod header;
pub mod nft_preview;
pub mod toast;

pub use connect_button::ConnectButton;
pub use copy_field::CopyField;
pub use drop_zone::DropZone;
pub use header::Header;
pub use nft_preview::NftPreview;
pub use toast::ToastView;
