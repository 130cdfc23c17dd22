use std::path::PathBuf;

pub const STORAGE_ROOT_VAR: &str = "MEDIA_CAPTURE_STORAGE_ROOT";
pub const DCIM_DIR_VAR: &str = "MEDIA_CAPTURE_DCIM_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_root: PathBuf,
    pub dcim_folder: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_root: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            dcim_folder: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(root) = lookup(STORAGE_ROOT_VAR).filter(|value| !value.trim().is_empty()) {
            config.storage_root = PathBuf::from(root);
        }
        config.dcim_folder = lookup(DCIM_DIR_VAR).filter(|value| !value.trim().is_empty());
        config
    }
}
