use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use reversi_tui::config::{AppConfig, LogConfig, UiConfig};
use reversi_tui::game::Game;
use reversi_tui::ui::{self, App, PlayMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Reversi in the terminal.
#[derive(Parser)]
#[command(name = "reversi", about = "Play Reversi in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "reversi.toml")]
    config: PathBuf,

    /// Who plays which side; skips the startup prompt
    #[arg(long, value_enum)]
    mode: Option<PlayMode>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    init_tracing(&config.log)?;

    println!("\n############# REVERSI #############");

    let mode = match cli.mode.or(config.game.mode) {
        Some(mode) => mode,
        None => {
            let stdin = io::stdin();
            ui::prompt_play_mode(&mut stdin.lock(), &mut io::stdout())
                .context("reading play mode")?
        }
    };
    info!(mode = mode.label(), "starting match");

    let game = Game::new(mode.players()).context("creating match")?;
    let game = play(game, mode, &config.ui)?;

    let counts = game.board().count_by_color();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "\n############# Result #############\n")?;
    writeln!(stdout, "{}", game.render())?;
    writeln!(stdout, "{}", ui::result_line(&counts))?;
    writeln!(stdout, "{}", ui::outcome_line(game.outcome()))?;
    writeln!(stdout, "\n############# Thank you #############")?;
    Ok(())
}

/// Log to a file so tracing output never lands on the game screen.
fn init_tracing(log: &LogConfig) -> Result<()> {
    let log_file = std::fs::File::create(&log.file)
        .with_context(|| format!("creating log file {}", log.file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Run the match in the alternate screen and return the final game.
fn play(game: Game, mode: PlayMode, ui_config: &UiConfig) -> Result<Game> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("entering alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("creating terminal");
        }
    };

    let (event_tx, event_rx) = mpsc::channel();
    let quit = Arc::new(AtomicBool::new(false));
    let input_handle = ui::spawn_input_thread(event_tx, quit.clone(), ui_config.poll_interval());

    let app = App::new(game, mode, ui_config.show_legal_moves);
    let res = app.run(&mut terminal, &event_rx);

    quit.store(true, Ordering::Relaxed);
    let _ = input_handle.join();

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game loop")
}
