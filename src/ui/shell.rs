use anyhow::Result;

use crate::{
    domain::shell_state::ShellState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        endpoint = %context.endpoint,
        widget_mounted = orchestrator.state().widget().is_some(),
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    })
}

/// Draws, then handles one event, until the orchestrator stops running.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&mut ShellState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state_mut())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            connection_state::ConnectionState,
            events::{AppEvent, KeyInput},
            widget_state::RenderStyle,
        },
        test_support::{FakeHostPage, FakeTransport},
        ui::event_source::MockEventSource,
        usecases::{chat_widget, contracts::TransportEvent, shell::DefaultShellOrchestrator},
    };
    use ratatui::{backend::TestBackend, Terminal};

    fn orchestrator(transport: FakeTransport) -> DefaultShellOrchestrator<FakeTransport> {
        let widget = chat_widget::mount(&FakeHostPage::complete(), RenderStyle::ClassTag)
            .expect("all elements present");
        DefaultShellOrchestrator::new(
            ShellState::new("ws://localhost:8000/ws/chat/", Some(widget)),
            transport,
        )
    }

    fn key(name: &str, ctrl: bool) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(name, ctrl))
    }

    #[test]
    fn orchestrator_stops_on_quit_from_source() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let mut orchestrator = orchestrator(FakeTransport::default());
        let mut draws = 0;

        run_loop(&mut source, &mut orchestrator, |_| {
            draws += 1;
            Ok(())
        })
        .expect("loop should finish");

        assert_eq!(draws, 1);
        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn typed_message_is_sent_over_open_connection() {
        let mut transport = FakeTransport::default();
        transport.push_event(TransportEvent::StateChanged(ConnectionState::Open));
        let mut orchestrator = orchestrator(transport);
        let mut source = MockEventSource::from(vec![
            AppEvent::Tick,
            key("t", true),
            key("h", false),
            key("i", false),
            key("enter", false),
        ]);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");

        run_loop(&mut source, &mut orchestrator, |state| {
            terminal.draw(|frame| view::render(frame, state))?;
            Ok(())
        })
        .expect("loop should finish");

        assert_eq!(
            orchestrator.connection_transport().sent_frames(),
            [r#"{"message":"hi"}"#.to_owned()]
        );
        assert_eq!(orchestrator.state().connection_state(), ConnectionState::Open);
    }
}
