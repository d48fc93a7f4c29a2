use std::{io, panic, thread};

use crossterm::{
    event::DisableBracketedPaste,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

/// Leaves raw mode and the alternate screen before the default hook prints
/// a panic of the main thread. Worker panics are reported by their
/// supervisors and leave the terminal alone.
pub fn install_terminal_restore_hook() {
    let default_hook = panic::take_hook();
    let main_thread = thread::current().id();

    panic::set_hook(Box::new(move |panic_info| {
        if thread::current().id() != main_thread {
            tracing::error!(panic = %panic_info, "chatbot-tui worker panicked");
            return;
        }

        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);

        tracing::error!(panic = %panic_info, "chatbot-tui panicked");
        default_hook(panic_info);
    }));
}
