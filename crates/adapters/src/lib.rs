pub mod fs;
pub mod host;
pub mod presenters;

pub use fs::{ExternalStorageLayout, FsDirectoryCreator, SystemClock};
pub use host::{JsonActivityHost, TerminalDialogPresenter};
pub use presenters::{present_dialog, present_launch_outcome, present_pending_request};
