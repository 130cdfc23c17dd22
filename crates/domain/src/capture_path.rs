use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::DomainError;

pub const CAPTURE_FILE_PREFIX: &str = "wp-";
pub const CAPTURE_FILE_SUFFIX: &str = ".jpg";

/// Absolute location a camera activity is asked to write a still photo to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaCapturePath(PathBuf);

impl MediaCapturePath {
    /// Builds `<directory>/wp-<epoch_millis>.jpg`.
    pub fn in_directory(directory: &Path, epoch_millis: i64) -> Self {
        Self(directory.join(file_name_for(epoch_millis)))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Directory the capture file lands in.
    pub fn parent(&self) -> Option<&Path> {
        self.0.parent()
    }

    /// `file://` URI handed to the capture activity as its output target.
    pub fn output_uri(&self) -> Result<Url, DomainError> {
        Url::from_file_path(&self.0).map_err(|()| DomainError::RelativeCapturePath(self.0.clone()))
    }
}

impl Display for MediaCapturePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

fn file_name_for(epoch_millis: i64) -> String {
    format!("{CAPTURE_FILE_PREFIX}{epoch_millis}{CAPTURE_FILE_SUFFIX}")
}
