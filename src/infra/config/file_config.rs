use std::path::PathBuf;

use serde::Deserialize;

use crate::{
    domain::widget_state::RenderStyle,
    infra::config::{AppConfig, ConnectionConfig, LogConfig, WidgetConfig},
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub connection: Option<FileConnectionConfig>,
    pub widget: Option<FileWidgetConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(connection) = self.connection {
            connection.merge_into(&mut config.connection);
        }

        if let Some(widget) = self.widget {
            widget.merge_into(&mut config.widget);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConnectionConfig {
    pub page_url: Option<String>,
}

impl FileConnectionConfig {
    fn merge_into(self, config: &mut ConnectionConfig) {
        if let Some(page_url) = self.page_url {
            config.page_url = page_url;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileWidgetConfig {
    pub render_style: Option<RenderStyle>,
    pub toggle_key: Option<String>,
    pub close_key: Option<String>,
    pub send_key: Option<String>,
}

impl FileWidgetConfig {
    fn merge_into(self, config: &mut WidgetConfig) {
        if let Some(render_style) = self.render_style {
            config.render_style = render_style;
        }

        if let Some(toggle_key) = self.toggle_key {
            config.toggle_key = toggle_key;
        }

        if let Some(close_key) = self.close_key {
            config.close_key = close_key;
        }

        if let Some(send_key) = self.send_key {
            config.send_key = send_key;
        }
    }
}
