mod app;
pub mod input;
mod message;
pub mod ui;

use crate::config::Config;
use crate::fetch;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub use app::{App, InputMode, ModalState, SPINNER_FRAMES};
pub use message::Message;

pub async fn run(config: Config) -> Result<()> {
    // Check if stdout is a terminal
    if !std::io::IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!("apinexus requires an interactive terminal");
    }

    let client = fetch::build_client(&config.http)?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Mounting the initial panel queues its first fetch; the loop spawns it
    let mut app = App::new(config);

    let result = run_app(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &reqwest::Client,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = std::time::Instant::now();
    let mut input_state = input::InputState::new();

    loop {
        app.dispatch_pending(client);
        app.poll_fetches();

        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let msg = input::dispatch(app, &mut input_state, key);
                if app.update(msg)? {
                    return Ok(()); // Quit requested
                }
            }
        }

        // Handle pending chord timeout (non-blocking)
        if input_state.has_timed_out() {
            input_state.clear();
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick_spinner();
            last_tick = std::time::Instant::now();
        }

        // Let spawned fetches make progress on the runtime
        tokio::task::yield_now().await;
    }
}
