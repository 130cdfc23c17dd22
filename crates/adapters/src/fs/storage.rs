use std::path::PathBuf;

use media_capture_application::{MediaDirectories, StorageProbe};

pub const DEFAULT_DCIM_FOLDER: &str = "DCIM";
const CAMERA_FOLDER: &str = "Camera";

/// Layout of the public external storage volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalStorageLayout {
    root: PathBuf,
    dcim_folder_name: Option<String>,
}

impl ExternalStorageLayout {
    /// A relative `root` is resolved against the working directory so that
    /// capture paths are always absolute.
    pub fn new(root: impl Into<PathBuf>, dcim_folder_name: Option<String>) -> Self {
        let root = root.into();
        Self {
            root: std::path::absolute(&root).unwrap_or(root),
            dcim_folder_name: dcim_folder_name.filter(|name| !name.trim().is_empty()),
        }
    }

    /// Uses the user's home directory as the storage root, or the working
    /// directory when there is none.
    pub fn from_home_dir() -> Self {
        Self::new(dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")), None)
    }

    fn dcim_folder(&self) -> &str {
        self.dcim_folder_name
            .as_deref()
            .unwrap_or(DEFAULT_DCIM_FOLDER)
    }
}

impl MediaDirectories for ExternalStorageLayout {
    fn public_camera_dir(&self) -> PathBuf {
        self.root.join(self.dcim_folder()).join(CAMERA_FOLDER)
    }
}

impl StorageProbe for ExternalStorageLayout {
    fn is_external_storage_mounted(&self) -> bool {
        self.root.is_dir()
    }
}
