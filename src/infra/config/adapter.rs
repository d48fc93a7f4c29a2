use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Loads the TOML config file and applies command-line overrides on top.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
    page_url: Option<String>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            page_url: None,
        }
    }

    pub fn with_page_url(mut self, page_url: Option<&str>) -> Self {
        self.page_url = page_url.map(str::to_owned);
        self
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        let mut config = load(self.path.as_deref())?;

        if let Some(page_url) = &self.page_url {
            config.connection.page_url = page_url.clone();
        }

        Ok(config)
    }
}
