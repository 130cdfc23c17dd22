use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use media_capture_application::{ApplicationError, DirectoryCreator};
use tracing::debug;

#[derive(Debug, Default)]
pub struct FsDirectoryCreator;

impl DirectoryCreator for FsDirectoryCreator {
    fn exists(&self, directory: &Path) -> bool {
        directory.is_dir()
    }

    fn create_dir_all(&self, directory: &Path) -> Result<(), ApplicationError> {
        debug!(directory = %directory.display(), "creating capture directory");
        match fs::create_dir_all(directory) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::AlreadyExists && directory.is_dir() => Ok(()),
            Err(error) => Err(ApplicationError::Io(format!(
                "failed to create {}: {error}",
                directory.display()
            ))),
        }
    }
}
