use media_capture_application::{CaptureDiagnostic, LaunchOutcome};
use media_capture_domain::{PendingRequest, StorageDialog};

pub fn present_pending_request(request: &PendingRequest) -> String {
    let mut line = format!(
        "{} request_code={}",
        request.action.platform_name(),
        request.request_code.code()
    );
    if let Some(mime) = &request.mime_type {
        line.push_str(&format!(" type={mime}"));
    }
    if let Some(output) = &request.output {
        line.push_str(&format!(" output={output}"));
    }
    line
}

pub fn present_dialog(dialog: &StorageDialog) -> String {
    format!(
        "{}\n{}\n[{}]",
        dialog.title, dialog.message, dialog.dismiss_label
    )
}

pub fn present_launch_outcome(outcome: &LaunchOutcome) -> String {
    match outcome {
        LaunchOutcome::StorageUnavailable => "camera not launched: storage unavailable".to_string(),
        LaunchOutcome::Launched {
            request,
            diagnostic: None,
        } => format!("launched {}", present_pending_request(request)),
        LaunchOutcome::Launched {
            request,
            diagnostic: Some(CaptureDiagnostic::DirectoryCreationFailed { directory, reason }),
        } => format!(
            "launched {} (warning: {} could not be created: {reason})",
            present_pending_request(request),
            directory.display()
        ),
    }
}
