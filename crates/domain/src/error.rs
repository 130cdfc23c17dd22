use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown activity request code {0}")]
    UnknownRequestCode(i32),
    #[error("capture path must be absolute, got {0:?}")]
    RelativeCapturePath(PathBuf),
}
