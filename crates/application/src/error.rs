use std::path::PathBuf;

use media_capture_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("io error: {0}")]
    Io(String),
    #[error("host error: {0}")]
    Host(String),
}

/// Non-fatal problems noticed while preparing a capture. The request is
/// still issued when one of these is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureDiagnostic {
    #[error("capture directory {directory:?} could not be created: {reason}")]
    DirectoryCreationFailed { directory: PathBuf, reason: String },
}
