use std::path::{Path, PathBuf};

use media_capture_domain::{PendingRequest, StorageDialog};

use crate::ApplicationError;

pub trait Clock {
    fn now_epoch_millis(&self) -> i64;
}

/// Platform-designated public media locations.
pub trait MediaDirectories {
    fn public_camera_dir(&self) -> PathBuf;
}

pub trait DirectoryCreator {
    fn exists(&self, directory: &Path) -> bool;

    /// Creates `directory` and any missing parents. A directory that already
    /// exists is not an error.
    fn create_dir_all(&self, directory: &Path) -> Result<(), ApplicationError>;
}

pub trait StorageProbe {
    fn is_external_storage_mounted(&self) -> bool;
}

/// Launches an external activity; its result arrives later through the
/// host's own callback, keyed by the request code.
pub trait ActivityHost {
    fn start_activity_for_result(&self, request: &PendingRequest) -> Result<(), ApplicationError>;
}

pub trait DialogPresenter {
    fn show_confirmation(&self, dialog: &StorageDialog) -> Result<(), ApplicationError>;
}
