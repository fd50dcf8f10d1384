use std::{io, time::Duration};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use reelscope_lib::app::{App, AsyncAction};
use reelscope_lib::config::AppConfig;
use reelscope_lib::handlers::async_actions::{
    handle_async_action, spawn_page_fetch, spawn_trending_fetch,
};
use reelscope_lib::handlers::{input, mouse};
use reelscope_lib::ui;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Validate configuration and exit
    #[arg(long)]
    check: bool,

    /// Start the session with this search term
    #[arg(short, long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    use clap::Parser;
    let args = Args::parse();

    let config = AppConfig::load()?;

    // -- CLI MODE --
    if args.check {
        println!(
            "Catalog credentials: {}",
            if config.catalog_ready() {
                "ok"
            } else {
                "missing (set TMDB_API_TOKEN)"
            }
        );
        println!(
            "Trending store: {}",
            if config.trending_ready() {
                "ok"
            } else {
                "not configured (trending pane disabled)"
            }
        );
        return Ok(());
    }

    if !config.catalog_ready() {
        anyhow::bail!("no catalog API token configured; set TMDB_API_TOKEN or edit config.json");
    }

    // -- TUI MODE (Default) --

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Async Channel
    let (tx, mut rx) = mpsc::channel::<AsyncAction>(32);

    // Initial load: discover mode (or --query) plus the trending pane.
    let initial_query = args.query.unwrap_or_default();
    app.search_input = tui_input::Input::new(initial_query.clone());
    app.begin_query(initial_query.clone());
    spawn_page_fetch(&app.catalog, &tx, initial_query, 1);
    if app.config.trending_ready() {
        spawn_trending_fetch(&app.store, &tx);
    }

    let res = run_app(&mut terminal, &mut app, tx, &mut rx).await;

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tx: mpsc::Sender<AsyncAction>,
    rx: &mut mpsc::Receiver<AsyncAction>,
) -> io::Result<()>
where
    std::io::Error: From<<B as ratatui::backend::Backend>::Error>,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // 1. Apply async completions (non-blocking)
        while let Ok(action) = rx.try_recv() {
            handle_async_action(app, action, &tx).await;
        }

        // 2. Poll inputs; the timeout doubles as the animation tick
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only process key press events, not release (Windows sends both)
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    input::handle_key(app, key, &tx);
                }
                Event::Mouse(mouse_event) => {
                    mouse::handle_mouse(app, mouse_event, &tx);
                }
                _ => {}
            }
        } else {
            app.loading_tick = app.loading_tick.wrapping_add(1);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
