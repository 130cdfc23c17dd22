mod error;
mod launcher;
mod ports;
mod service;

pub use error::{ApplicationError, CaptureDiagnostic};
pub use launcher::{LaunchOutcome, MediaLauncher};
pub use ports::{
    ActivityHost, Clock, DialogPresenter, DirectoryCreator, MediaDirectories, StorageProbe,
};
pub use service::{CameraCapture, CameraCaptureResult, CaptureRequestHelper, PreparedCapture};
