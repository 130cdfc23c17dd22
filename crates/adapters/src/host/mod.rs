use std::cell::RefCell;
use std::io::Write;

use media_capture_application::{ActivityHost, ApplicationError, DialogPresenter};
use media_capture_domain::{PendingRequest, StorageDialog};
use serde_json::json;

use crate::presenters::present_dialog;

/// Activity host that writes each launch as one JSON line, for hosts that
/// consume requests out of process.
pub struct JsonActivityHost<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> JsonActivityHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> ActivityHost for JsonActivityHost<W> {
    fn start_activity_for_result(&self, request: &PendingRequest) -> Result<(), ApplicationError> {
        let output_uri = request
            .output
            .as_ref()
            .map(|path| path.output_uri().map(|uri| uri.to_string()))
            .transpose()?;
        let line = json!({
            "action": request.action.platform_name(),
            "type": request.mime_type,
            "output": output_uri,
            "request_code": request.request_code.code(),
        });

        let mut out = self.out.borrow_mut();
        writeln!(out, "{line}").map_err(|error| ApplicationError::Host(error.to_string()))?;
        out.flush()
            .map_err(|error| ApplicationError::Host(error.to_string()))
    }
}

/// Prints the storage dialog; dismissing it needs no input.
pub struct TerminalDialogPresenter<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> TerminalDialogPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> DialogPresenter for TerminalDialogPresenter<W> {
    fn show_confirmation(&self, dialog: &StorageDialog) -> Result<(), ApplicationError> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", present_dialog(dialog))
            .map_err(|error| ApplicationError::Host(error.to_string()))
    }
}
