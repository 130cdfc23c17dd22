use serde::{Deserialize, Serialize};

/// Blocking confirmation shown when external storage is not mounted.
/// It has a single action, which only dismisses the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDialog {
    pub title: String,
    pub message: String,
    pub dismiss_label: String,
}

impl Default for StorageDialog {
    fn default() -> Self {
        Self {
            title: "SD Card Required".to_string(),
            message: "A mounted SD card is required to upload media".to_string(),
            dismiss_label: "OK".to_string(),
        }
    }
}
