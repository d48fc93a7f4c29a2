use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "config file not found; using defaults");
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::widget_state::RenderStyle;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file must be creatable");
        file.write_all(contents.as_bytes())
            .expect("must write test config");
        file
    }

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let file = config_file(
            r#"[logging]
level = "debug"

[connection]
page_url = "https://chat.example.com/"

[widget]
render_style = "inline_style"
send_key = "f2"
"#,
        );

        let config = load(Some(file.path())).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.connection.page_url, "https://chat.example.com/");
        assert_eq!(config.widget.render_style, RenderStyle::InlineStyle);
        assert_eq!(config.widget.send_key, "f2");
        assert_eq!(config.widget.toggle_key, "ctrl+t");
        assert_eq!(config.widget.close_key, "esc");
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let file = config_file("[widget]\nrender_style = \"sparkles\"\n");

        let error = load(Some(file.path())).expect_err("unknown render style must fail");

        assert!(matches!(error, AppError::ConfigParse { .. }));
        assert!(error.to_string().contains(&file.path().display().to_string()));
    }
}
