use std::path::Path;

use media_capture_domain::{MediaCapturePath, MediaKind, PendingRequest, StorageDialog};
use tracing::{debug, warn};

use crate::{CaptureDiagnostic, Clock, DirectoryCreator, MediaDirectories};

/// Builds the activity requests for picking and capturing media.
///
/// Apart from the still-photo path, which embeds the current time, every
/// request is a pure function of its inputs.
pub struct CaptureRequestHelper {
    clock: Box<dyn Clock>,
    directories: Box<dyn MediaDirectories>,
    filesystem: Box<dyn DirectoryCreator>,
    storage_dialog: StorageDialog,
}

/// First phase of a still-photo capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraCapture {
    StorageUnavailable(StorageDialog),
    Prepared(PreparedCapture),
}

/// A capture whose output path is known but whose request has not been
/// handed out yet. The only way to obtain the request is [`PreparedCapture::launch`],
/// so callers always see the path first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCapture {
    path: MediaCapturePath,
    directory_error: Option<CaptureDiagnostic>,
}

impl PreparedCapture {
    pub fn path(&self) -> &MediaCapturePath {
        &self.path
    }

    pub fn directory_error(&self) -> Option<&CaptureDiagnostic> {
        self.directory_error.as_ref()
    }

    pub fn launch(self) -> PendingRequest {
        PendingRequest::image_capture(self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraCaptureResult {
    StorageUnavailable(StorageDialog),
    Issued {
        request: PendingRequest,
        diagnostic: Option<CaptureDiagnostic>,
    },
}

impl CaptureRequestHelper {
    pub fn new(
        clock: Box<dyn Clock>,
        directories: Box<dyn MediaDirectories>,
        filesystem: Box<dyn DirectoryCreator>,
    ) -> Self {
        Self {
            clock,
            directories,
            filesystem,
            storage_dialog: StorageDialog::default(),
        }
    }

    pub fn with_storage_dialog(mut self, dialog: StorageDialog) -> Self {
        self.storage_dialog = dialog;
        self
    }

    pub fn launch_library_picker(&self, kind: MediaKind) -> PendingRequest {
        let request = PendingRequest::pick(kind);
        debug!(
            mime = kind.mime_filter(),
            code = request.request_code.code(),
            "library picker requested"
        );
        request
    }

    pub fn prepare_camera_capture(&self, storage_available: bool) -> CameraCapture {
        if !storage_available {
            debug!("external storage unavailable, camera capture aborted");
            return CameraCapture::StorageUnavailable(self.storage_dialog.clone());
        }

        let directory = self.directories.public_camera_dir();
        let path = MediaCapturePath::in_directory(&directory, self.clock.now_epoch_millis());
        let directory_error = self.ensure_capture_directory(&directory);
        debug!(path = %path, "camera capture prepared");

        CameraCapture::Prepared(PreparedCapture {
            path,
            directory_error,
        })
    }

    /// Prepares a capture, reports the output path to `on_path_ready` and
    /// only then builds the `TakePhoto` request.
    pub fn launch_camera_capture(
        &self,
        storage_available: bool,
        on_path_ready: Option<&mut dyn FnMut(&MediaCapturePath)>,
    ) -> CameraCaptureResult {
        let prepared = match self.prepare_camera_capture(storage_available) {
            CameraCapture::StorageUnavailable(dialog) => {
                return CameraCaptureResult::StorageUnavailable(dialog)
            }
            CameraCapture::Prepared(prepared) => prepared,
        };

        if let Some(callback) = on_path_ready {
            callback(prepared.path());
        }

        let diagnostic = prepared.directory_error().cloned();
        CameraCaptureResult::Issued {
            request: prepared.launch(),
            diagnostic,
        }
    }

    pub fn launch_video_capture(&self) -> PendingRequest {
        debug!("video capture requested");
        PendingRequest::video_capture()
    }

    fn ensure_capture_directory(&self, directory: &Path) -> Option<CaptureDiagnostic> {
        if self.filesystem.exists(directory) {
            return None;
        }

        match self.filesystem.create_dir_all(directory) {
            Ok(()) => None,
            // Another caller created it between the check and our attempt.
            Err(_) if self.filesystem.exists(directory) => None,
            Err(error) => {
                warn!(
                    directory = %directory.display(),
                    %error,
                    "capture directory could not be created, issuing capture anyway"
                );
                Some(CaptureDiagnostic::DirectoryCreationFailed {
                    directory: directory.to_path_buf(),
                    reason: error.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use media_capture_domain::{IntentAction, RequestCode};

    use super::*;
    use crate::ApplicationError;

    pub(crate) struct FixedClock(pub i64);

    impl Clock for FixedClock {
        fn now_epoch_millis(&self) -> i64 {
            self.0
        }
    }

    pub(crate) struct FixedDirectories(pub PathBuf);

    impl MediaDirectories for FixedDirectories {
        fn public_camera_dir(&self) -> PathBuf {
            self.0.clone()
        }
    }

    #[derive(Default, Clone)]
    pub(crate) struct FakeFilesystem {
        pub existing: Rc<RefCell<HashSet<PathBuf>>>,
        pub create_calls: Rc<Cell<usize>>,
        pub fail_creation: bool,
    }

    impl DirectoryCreator for FakeFilesystem {
        fn exists(&self, directory: &Path) -> bool {
            self.existing.borrow().contains(directory)
        }

        fn create_dir_all(&self, directory: &Path) -> Result<(), ApplicationError> {
            self.create_calls.set(self.create_calls.get() + 1);
            if self.fail_creation {
                return Err(ApplicationError::Io("permission denied".to_string()));
            }
            self.existing.borrow_mut().insert(directory.to_path_buf());
            Ok(())
        }
    }

    pub(crate) const CAMERA_DIR: &str = "/storage/emulated/0/DCIM/Camera";

    fn helper(millis: i64, filesystem: FakeFilesystem) -> CaptureRequestHelper {
        CaptureRequestHelper::new(
            Box::new(FixedClock(millis)),
            Box::new(FixedDirectories(PathBuf::from(CAMERA_DIR))),
            Box::new(filesystem),
        )
    }

    #[test]
    fn library_picker_requests_match_media_kind() {
        let helper = helper(1, FakeFilesystem::default());

        let image = helper.launch_library_picker(MediaKind::Image);
        assert_eq!(image.action, IntentAction::Pick);
        assert_eq!(image.mime_type.as_deref(), Some("image/*"));
        assert_eq!(image.request_code, RequestCode::PictureLibrary);

        let video = helper.launch_library_picker(MediaKind::Video);
        assert_eq!(video.mime_type.as_deref(), Some("video/*"));
        assert_eq!(video.request_code, RequestCode::VideoLibrary);
    }

    #[test]
    fn video_capture_has_no_output_path() {
        let request = helper(1, FakeFilesystem::default()).launch_video_capture();
        assert_eq!(request.action, IntentAction::VideoCapture);
        assert_eq!(request.request_code, RequestCode::TakeVideo);
        assert!(request.output.is_none());
    }

    #[test]
    fn unavailable_storage_returns_dialog_without_touching_filesystem() {
        let filesystem = FakeFilesystem::default();
        let helper = helper(1, filesystem.clone());
        let mut notified = false;
        let mut callback = |_: &MediaCapturePath| notified = true;

        let result = helper.launch_camera_capture(false, Some(&mut callback));

        assert_eq!(
            result,
            CameraCaptureResult::StorageUnavailable(StorageDialog::default())
        );
        assert!(!notified);
        assert_eq!(filesystem.create_calls.get(), 0);
    }

    #[test]
    fn camera_capture_reports_path_before_returning_request() {
        let filesystem = FakeFilesystem::default();
        let helper = helper(1_372_802_220_000, filesystem.clone());
        let mut reported = Vec::new();
        let mut callback = |path: &MediaCapturePath| reported.push(path.clone());

        let result = helper.launch_camera_capture(true, Some(&mut callback));

        let expected = PathBuf::from(format!("{CAMERA_DIR}/wp-1372802220000.jpg"));
        let CameraCaptureResult::Issued {
            request,
            diagnostic,
        } = result
        else {
            panic!("capture should be issued");
        };
        assert_eq!(request.request_code, RequestCode::TakePhoto);
        assert_eq!(request.action, IntentAction::ImageCapture);
        let output = request.output.expect("photo capture has an output path");
        assert_eq!(output.as_path(), expected.as_path());
        assert_eq!(reported, vec![output]);
        assert!(diagnostic.is_none());
        assert!(filesystem.exists(Path::new(CAMERA_DIR)));
    }

    #[test]
    fn camera_capture_without_callback_still_issues_request() {
        let result = helper(9, FakeFilesystem::default()).launch_camera_capture(true, None);
        assert!(matches!(result, CameraCaptureResult::Issued { .. }));
    }

    #[test]
    fn existing_directory_is_not_recreated() {
        let filesystem = FakeFilesystem::default();
        let helper = helper(5, filesystem.clone());

        let first = helper.prepare_camera_capture(true);
        let second = helper.prepare_camera_capture(true);

        assert_eq!(first, second);
        assert_eq!(filesystem.create_calls.get(), 1);
    }

    #[test]
    fn directory_creation_failure_is_reported_but_not_fatal() {
        let filesystem = FakeFilesystem {
            fail_creation: true,
            ..FakeFilesystem::default()
        };
        let helper = helper(5, filesystem);

        let result = helper.launch_camera_capture(true, None);

        let CameraCaptureResult::Issued {
            request,
            diagnostic,
        } = result
        else {
            panic!("capture should still be issued");
        };
        assert_eq!(request.request_code, RequestCode::TakePhoto);
        assert!(matches!(
            diagnostic,
            Some(CaptureDiagnostic::DirectoryCreationFailed { ref directory, .. })
                if directory == Path::new(CAMERA_DIR)
        ));
    }

    #[test]
    fn prepared_capture_exposes_path_then_launches() {
        let helper = helper(77, FakeFilesystem::default());
        let CameraCapture::Prepared(prepared) = helper.prepare_camera_capture(true) else {
            panic!("storage is available");
        };
        let path = prepared.path().clone();
        assert!(prepared.directory_error().is_none());

        let request = prepared.launch();
        assert_eq!(request.output, Some(path));
    }

    #[test]
    fn custom_storage_dialog_is_returned() {
        let dialog = StorageDialog {
            title: "Storage".to_string(),
            message: "Insert a card".to_string(),
            dismiss_label: "Close".to_string(),
        };
        let helper = helper(1, FakeFilesystem::default()).with_storage_dialog(dialog.clone());
        assert_eq!(
            helper.prepare_camera_capture(false),
            CameraCapture::StorageUnavailable(dialog)
        );
    }
}
