use media_capture_domain::{MediaCapturePath, MediaKind, PendingRequest};
use tracing::info;

use crate::{
    ActivityHost, ApplicationError, CameraCaptureResult, CaptureDiagnostic, CaptureRequestHelper,
    DialogPresenter, StorageProbe,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Launched {
        request: PendingRequest,
        diagnostic: Option<CaptureDiagnostic>,
    },
    /// The storage dialog was shown and nothing was launched.
    StorageUnavailable,
}

/// Hands requests built by [`CaptureRequestHelper`] to the host, showing the
/// storage dialog instead when a photo cannot be captured.
pub struct MediaLauncher {
    helper: CaptureRequestHelper,
    storage: Box<dyn StorageProbe>,
    host: Box<dyn ActivityHost>,
    dialogs: Box<dyn DialogPresenter>,
}

impl MediaLauncher {
    pub fn new(
        helper: CaptureRequestHelper,
        storage: Box<dyn StorageProbe>,
        host: Box<dyn ActivityHost>,
        dialogs: Box<dyn DialogPresenter>,
    ) -> Self {
        Self {
            helper,
            storage,
            host,
            dialogs,
        }
    }

    pub fn launch_picture_library(&self) -> Result<PendingRequest, ApplicationError> {
        self.start(self.helper.launch_library_picker(MediaKind::Image))
    }

    pub fn launch_video_library(&self) -> Result<PendingRequest, ApplicationError> {
        self.start(self.helper.launch_library_picker(MediaKind::Video))
    }

    pub fn launch_video_camera(&self) -> Result<PendingRequest, ApplicationError> {
        self.start(self.helper.launch_video_capture())
    }

    pub fn launch_camera(
        &self,
        on_path_ready: Option<&mut dyn FnMut(&MediaCapturePath)>,
    ) -> Result<LaunchOutcome, ApplicationError> {
        let mounted = self.storage.is_external_storage_mounted();
        match self.helper.launch_camera_capture(mounted, on_path_ready) {
            CameraCaptureResult::StorageUnavailable(dialog) => {
                info!("external storage is not mounted");
                self.dialogs.show_confirmation(&dialog)?;
                Ok(LaunchOutcome::StorageUnavailable)
            }
            CameraCaptureResult::Issued {
                request,
                diagnostic,
            } => {
                let request = self.start(request)?;
                Ok(LaunchOutcome::Launched {
                    request,
                    diagnostic,
                })
            }
        }
    }

    fn start(&self, request: PendingRequest) -> Result<PendingRequest, ApplicationError> {
        self.host.start_activity_for_result(&request)?;
        info!(
            action = request.action.platform_name(),
            code = request.request_code.code(),
            "activity launched"
        );
        Ok(request)
    }
}
