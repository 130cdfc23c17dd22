mod capture_path;
mod date;
mod dialog;
mod error;
mod image;
mod request;

pub use capture_path::{MediaCapturePath, CAPTURE_FILE_PREFIX, CAPTURE_FILE_SUFFIX};
pub use date::format_display_date;
pub use dialog::StorageDialog;
pub use error::DomainError;
pub use image::{is_valid_image, VALID_IMAGE_SUFFIXES};
pub use request::{IntentAction, MediaKind, PendingRequest, RequestCode};
