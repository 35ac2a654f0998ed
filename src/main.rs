use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use keyquest::config::Config;
use keyquest::engine::actions::default_registry;
use keyquest::engine::keys::KeyToken;
use keyquest::engine::processor::process;
use keyquest::engine::registry::BindingRegistry;
use keyquest::engine::state::EngineState;
use keyquest::file::loader::{load_lines, sample_lines};
use keyquest::input::InputHandler;
use keyquest::ui::UI;

/// KeyQuest - a terminal playground for practicing vim-style key commands
#[derive(Parser)]
#[command(name = "keyquest")]
#[command(version)]
#[command(about = "Practice vim-style key commands on a scratch buffer", long_about = None)]
struct Cli {
    /// Text file to load as the practice buffer (edits are never saved)
    file: Option<String>,

    /// Hide the status line
    #[arg(long)]
    no_status: bool,
}

/// Set up a panic hook that restores the terminal before displaying panic
/// information.
///
/// Without this, panic messages would be hidden or garbled by raw mode and
/// the alternate screen.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let config = Config::load();

    // Read the practice buffer before taking over the terminal.
    let buffer = match &cli.file {
        Some(path) => load_lines(path)?,
        None => sample_lines(),
    };

    let registry = default_registry(config.arrow_keys)
        .context("Failed to build the default binding registry")?;
    let mut state = EngineState::new(buffer);

    // Setup terminal. Termion reads /dev/tty directly when stdin is piped.
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let ui = UI::new(config.show_status_line && !cli.no_status);
    let mut input_handler = if io::stdin().is_terminal() {
        InputHandler::new()
    } else {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    };

    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &registry, &mut state);

    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    registry: &BindingRegistry,
    state: &mut EngineState,
) -> Result<()> {
    loop {
        ui.render(terminal, state)?;

        if let Some(key) = input_handler.poll_key()? {
            // Ctrl-C with nothing pending quits; with a pending sequence it
            // is fed to the engine as a cancellation.
            if key == KeyToken::CtrlC && state.command.is_empty() {
                break;
            }
            *state = process(registry, state.clone(), &[key]);
        }
    }

    Ok(())
}
