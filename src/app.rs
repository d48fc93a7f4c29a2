use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, transport, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref(), cli.page_url.as_deref())?;
            log_module_boundaries();

            let size = ui::terminal::current_size()?;
            let mut shell = bootstrap::compose_shell(&context, size)?;
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
            tracing::info!("TUI shell exited");
        }
        Command::Endpoint => {
            println!("{}", endpoint_line(&cli)?);
        }
    }

    Ok(())
}

fn endpoint_line(cli: &Cli) -> Result<String> {
    let context = bootstrap::resolve_context(cli.config.as_deref(), cli.page_url.as_deref())?;
    Ok(context.endpoint.to_string())
}

fn log_module_boundaries() {
    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        transport = transport::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );
}
