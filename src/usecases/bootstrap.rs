use std::path::Path;

use crate::{
    domain::shell_state::ShellState,
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError,
        storage_layout::StorageLayout,
    },
    transport::{ChatEndpoint, WebSocketTransport},
    ui::{CrosstermEventSource, TerminalPage},
    usecases::{
        chat_widget,
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

const CHAT_WIDGET_MOUNTED: &str = "CHAT_WIDGET_MOUNTED";
const CHAT_WIDGET_INERT: &str = "CHAT_WIDGET_INERT";

pub struct ComposedShell {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Loads config, resolves the endpoint and starts file logging.
pub fn bootstrap(
    config_path: Option<&Path>,
    page_url: Option<&str>,
) -> Result<AppContext, AppError> {
    let adapter = FileConfigAdapter::new(config_path).with_page_url(page_url);
    let mut context = build_context(&adapter)?;

    context.storage.ensure_dirs()?;
    let guard = infra::logging::init(&context.config.logging, &context.storage.log_file())?;
    context.attach_logging(guard);

    Ok(context)
}

/// Like [`bootstrap`] without touching the filesystem beyond reading config.
pub fn resolve_context(
    config_path: Option<&Path>,
    page_url: Option<&str>,
) -> Result<AppContext, AppError> {
    let adapter = FileConfigAdapter::new(config_path).with_page_url(page_url);
    build_context(&adapter)
}

fn build_context(adapter: &dyn ConfigAdapter) -> Result<AppContext, AppError> {
    let config = adapter.load().map_err(AppError::Other)?;
    let endpoint = ChatEndpoint::from_page_url(&config.connection.page_url).map_err(|source| {
        AppError::InvalidPageUrl {
            url: config.connection.page_url.clone(),
            source,
        }
    })?;
    let storage = StorageLayout::resolve()?;

    Ok(AppContext::new(config, endpoint, storage))
}

/// Mounts the chat widget on the terminal and opens the chat connection.
pub fn compose_shell(
    context: &AppContext,
    terminal_size: (u16, u16),
) -> Result<ComposedShell, AppError> {
    let page = TerminalPage::new(terminal_size, &context.config.widget);
    let widget = match chat_widget::mount(&page, context.config.widget.render_style) {
        Ok(widget) => {
            let elements = widget.elements();
            let surfaces: Vec<_> = elements
                .surface_kinds()
                .iter()
                .map(|kind| kind.as_label())
                .collect();
            tracing::info!(
                code = CHAT_WIDGET_MOUNTED,
                surfaces = %surfaces.join(","),
                toggle = %elements.toggle,
                close = %elements.close,
                send = %elements.send,
                "chat widget mounted"
            );
            Some(widget)
        }
        Err(missing) => {
            tracing::warn!(
                code = CHAT_WIDGET_INERT,
                element = missing.0.as_label(),
                "chat widget left unwired: {missing}"
            );
            None
        }
    };

    let transport = WebSocketTransport::connect(&context.endpoint)?;
    let state = ShellState::new(context.endpoint.as_str(), widget);

    Ok(ComposedShell {
        event_source: Box::new(CrosstermEventSource::default()),
        orchestrator: Box::new(DefaultShellOrchestrator::new(state, transport)),
    })
}
