use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::widget_state::RenderStyle;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub connection: ConnectionConfig,
    pub widget: WidgetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Log file location. Defaults to the state directory when unset.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Address of the page hosting the chat; the socket endpoint is derived from it.
    pub page_url: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            page_url: "http://localhost:8000/".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetConfig {
    pub render_style: RenderStyle,
    pub toggle_key: String,
    pub close_key: String,
    pub send_key: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            render_style: RenderStyle::ClassTag,
            toggle_key: "ctrl+t".to_owned(),
            close_key: "esc".to_owned(),
            send_key: "ctrl+s".to_owned(),
        }
    }
}
