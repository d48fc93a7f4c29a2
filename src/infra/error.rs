use std::path::PathBuf;

use thiserror::Error;

use crate::transport::{websocket::TransportStartError, EndpointError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid page url `{url}`: {source}")]
    InvalidPageUrl {
        url: String,
        #[source]
        source: EndpointError,
    },
    #[error("failed to resolve storage path: {details}")]
    StoragePathResolution { details: String },
    #[error("failed to create directory at {path}: {source}")]
    StorageDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed to start chat transport: {0}")]
    TransportStart(#[from] TransportStartError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
