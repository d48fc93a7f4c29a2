use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "chatbot-tui";
const LOG_FILE_NAME: &str = "chatbot-tui.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub state_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    /// Resolves `$XDG_STATE_HOME/chatbot-tui`, falling back to the platform
    /// state or cache directory.
    pub fn resolve() -> Result<Self, AppError> {
        let state_base = env::var_os("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(dirs::state_dir)
            .or_else(dirs::cache_dir)
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve state directory (XDG_STATE_HOME/HOME)".into(),
            })?;

        let state_dir = state_base.join(APP_DIR_NAME);
        let log_dir = state_dir.join("logs");

        Ok(Self { state_dir, log_dir })
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.state_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
