//! Interactive session loop

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{debug, info, warn};

use crate::{
    controller::TimerController,
    ticker::{TickEvent, TickSource},
    utils::shutdown_signal,
    view::{parse_command, render_line, render_presets, Command, HELP},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Leave as soon as a countdown expires
    pub exit_on_expiry: bool,
}

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Expired,
    InputClosed,
    Signal,
}

/// Drive the controller from tick events, stdin commands and signals.
///
/// Everything that mutates the timer runs on this one task. The controller is
/// dropped on return, which cancels any live countdown.
pub async fn run_session<S: TickSource>(
    mut controller: TimerController<S>,
    mut tick_rx: mpsc::UnboundedReceiver<TickEvent>,
    options: SessionOptions,
) -> SessionEnd {
    info!("Session started, type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            Some(event) = tick_rx.recv() => {
                controller.handle_tick(event);
                if options.exit_on_expiry && controller.state().is_expired {
                    return SessionEnd::Expired;
                }
            }

            line = lines.next_line(), if input_open => match line {
                Ok(Some(line)) => {
                    if let Some(end) = apply_line(&mut controller, &line) {
                        return end;
                    }
                }
                Ok(None) => {
                    debug!("Standard input closed");
                    input_open = false;
                    if !controller.state().is_running {
                        return SessionEnd::InputClosed;
                    }
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    input_open = false;
                }
            },

            _ = &mut shutdown => {
                controller.stop();
                return SessionEnd::Signal;
            }
        }

        if !input_open && !controller.state().is_running {
            return SessionEnd::InputClosed;
        }
    }
}

/// Apply one command line; returns `Some` when the session should end
pub fn apply_line<S: TickSource>(controller: &mut TimerController<S>, line: &str) -> Option<SessionEnd> {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(e) => {
            warn!("{}", e);
            return None;
        }
    };

    match command {
        Command::Intent(intent) => controller.dispatch(intent),
        Command::Start => {
            controller.start();
        }
        Command::Stop => {
            controller.stop();
        }
        Command::Clear => {
            controller.clear();
        }
        Command::Deselect => {
            controller.select_preset(None);
        }
        Command::Status => println!("{}", render_line(&controller.state())),
        Command::Presets => println!("{}", render_presets()),
        Command::Help => println!("{}", HELP),
        Command::Quit => return Some(SessionEnd::Quit),
    }
    None
}
