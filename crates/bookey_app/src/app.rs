use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use bookey_core::{update, AppState, Msg};
use bookey_engine::{EngineHandle, ReqwestPreviewService};
use bookey_logging::{bookey_debug, bookey_info, LogDestination, DEFAULT_LOG_FILE};
use log::LevelFilter;

use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::ui::input::{parse_command, Command, HELP};
use crate::ui::render;

/// How long the loop waits for input before checking the engine again.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> Result<()> {
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let config = AppConfig::load(&cwd)?;

    let destination = if config.log_to_file {
        LogDestination::File(DEFAULT_LOG_FILE.into())
    } else {
        LogDestination::Terminal
    };
    bookey_logging::initialize(destination, LevelFilter::Info);
    bookey_info!("Starting bookey against {}", config.base_url);

    let service = ReqwestPreviewService::new(config.service_settings()?)?;
    let engine = EngineHandle::new(Arc::new(service)).context("start engine")?;
    let mut app = App::new(EffectRunner::new(engine));

    let commands = spawn_input_reader();
    app.dispatch(Msg::Started);
    app.render_if_dirty(true);
    println!("{HELP}");

    let mut input_open = true;
    loop {
        if input_open {
            match commands.recv_timeout(TICK) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => println!("{HELP}"),
                Ok(Command::List) => app.render_if_dirty(true),
                Ok(command) => {
                    for msg in command.into_msgs() {
                        app.dispatch(msg);
                    }
                }
                Err(mpsc::RecvTimeoutError::Timeout) => app.dispatch(Msg::Tick),
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    bookey_debug!("Input closed");
                    input_open = false;
                }
            }
        } else {
            // End of input: finish outstanding requests so their result is shown.
            if !app.state.has_request_in_flight() {
                break;
            }
            if let Some(msg) = app.effects.wait_message(TICK) {
                app.dispatch(msg);
            }
        }

        app.pump_engine();
        app.render_if_dirty(false);
    }

    bookey_info!("Exiting");
    Ok(())
}

struct App {
    state: AppState,
    effects: EffectRunner,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        bookey_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }

    fn pump_engine(&mut self) {
        for msg in self.effects.poll_messages() {
            self.dispatch(msg);
        }
    }

    fn render_if_dirty(&mut self, force: bool) {
        let was_dirty = self.state.consume_dirty();
        if !(was_dirty || force) {
            return;
        }
        let mut stdout = io::stdout().lock();
        for line in render::render(&self.state.view()) {
            let _ = writeln!(stdout, "{line}");
        }
        let _ = writeln!(stdout);
        let _ = stdout.flush();
    }
}

/// Reads stdin lines on a dedicated thread. The channel closes at end of input.
fn spawn_input_reader() -> mpsc::Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                return;
            };
            match parse_command(&line) {
                Some(command) => {
                    if tx.send(command).is_err() {
                        return;
                    }
                }
                None if line.trim().is_empty() => {}
                None => println!("Unknown command. Type `help` for the list."),
            }
        }
    });
    rx
}
