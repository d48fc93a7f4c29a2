use crate::{
    infra::{config::AppConfig, logging::LoggingGuard, storage_layout::StorageLayout},
    transport::ChatEndpoint,
};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub endpoint: ChatEndpoint,
    pub storage: StorageLayout,
    _logging: Option<LoggingGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig, endpoint: ChatEndpoint, storage: StorageLayout) -> Self {
        Self {
            config,
            endpoint,
            storage,
            _logging: None,
        }
    }

    pub fn attach_logging(&mut self, guard: LoggingGuard) {
        self._logging = Some(guard);
    }
}
