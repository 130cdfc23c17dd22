use serde::{Deserialize, Serialize};

use crate::{DomainError, MediaCapturePath};

/// Tag correlating an asynchronous activity result with the request that
/// produced it. The integer values are stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestCode {
    PictureLibrary,
    TakePhoto,
    VideoLibrary,
    TakeVideo,
}

impl RequestCode {
    pub const ALL: [RequestCode; 4] = [
        Self::PictureLibrary,
        Self::TakePhoto,
        Self::VideoLibrary,
        Self::TakeVideo,
    ];

    pub fn code(self) -> i32 {
        match self {
            Self::PictureLibrary => 1000,
            Self::TakePhoto => 1100,
            Self::VideoLibrary => 1200,
            Self::TakeVideo => 1300,
        }
    }
}

impl TryFrom<i32> for RequestCode {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.code() == value)
            .ok_or(DomainError::UnknownRequestCode(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn mime_filter(self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Video => "video/*",
        }
    }

    pub fn library_request_code(self) -> RequestCode {
        match self {
            Self::Image => RequestCode::PictureLibrary,
            Self::Video => RequestCode::VideoLibrary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentAction {
    Pick,
    ImageCapture,
    VideoCapture,
}

impl IntentAction {
    /// Action string understood by the host platform.
    pub fn platform_name(self) -> &'static str {
        match self {
            Self::Pick => "android.intent.action.PICK",
            Self::ImageCapture => "android.media.action.IMAGE_CAPTURE",
            Self::VideoCapture => "android.media.action.VIDEO_CAPTURE",
        }
    }
}

/// Description of an external activity launch, ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRequest {
    pub action: IntentAction,
    pub mime_type: Option<String>,
    pub output: Option<MediaCapturePath>,
    pub request_code: RequestCode,
}

impl PendingRequest {
    pub fn pick(kind: MediaKind) -> Self {
        Self {
            action: IntentAction::Pick,
            mime_type: Some(kind.mime_filter().to_string()),
            output: None,
            request_code: kind.library_request_code(),
        }
    }

    pub fn image_capture(output: MediaCapturePath) -> Self {
        Self {
            action: IntentAction::ImageCapture,
            mime_type: None,
            output: Some(output),
            request_code: RequestCode::TakePhoto,
        }
    }

    pub fn video_capture() -> Self {
        Self {
            action: IntentAction::VideoCapture,
            mime_type: None,
            output: None,
            request_code: RequestCode::TakeVideo,
        }
    }
}
