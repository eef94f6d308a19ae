use armory::api::CatalogClient;
use armory::app::{App, AppMessage};
use armory::config::Config;
use armory::ui;

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Log file name, written to the current directory. The terminal itself
/// belongs to the TUI, so diagnostics go to a file instead of stderr.
const LOG_FILE: &str = "armory.log";

fn init_tracing() {
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
    else {
        return;
    };
    let filter = EnvFilter::try_from_env("ARMORY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = Config::from_env();
    tracing::info!(base_url = %config.base_url, "starting armory");

    let mut app = App::new(CatalogClient::new(&config));
    app.reload_listing();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Terminal restore, even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop: keyboard events and async results, one `select!`.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (select! needs ownership)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.on_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event error");
                    }
                    None => return Ok(()),
                }
            }

            message = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => None,
                }
            } => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
