use std::{fs, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

/// Keeps the background log writer alive; logs are flushed when dropped.
#[must_use]
pub struct LoggingGuard {
    _worker: WorkerGuard,
}

/// Routes tracing output to a file, since the terminal belongs to the TUI.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LogConfig, default_file: &Path) -> Result<LoggingGuard, AppError> {
    let path = config.file.as_deref().unwrap_or(default_file);
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::StoragePathResolution {
            details: format!("log path {} has no file name", path.display()),
        })?;

    fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
        path: dir.to_path_buf(),
        source,
    })?;

    let (writer, worker) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(LoggingGuard { _worker: worker })
}

impl std::fmt::Debug for LoggingGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingGuard").finish_non_exhaustive()
    }
}
