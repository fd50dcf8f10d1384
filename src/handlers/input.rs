use crossterm::event::{Event, KeyCode, KeyEvent};
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;

use crate::app::{App, AsyncAction, InputMode};
use crate::handlers::async_actions::{spawn_detail_fetch, spawn_page_fetch, spawn_trending_fetch};

pub fn handle_key(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AsyncAction>) {
    // Priority 1: Help Popup
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    // Priority 2: Detail Overlay
    if app.overlay.is_some() {
        handle_overlay_key(app, key);
        return;
    }

    // Priority 3: Search editing
    if app.input_mode == InputMode::Editing {
        handle_search_key(app, key, tx);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            maybe_fetch_next_page(app, tx);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous();
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.select_first();
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.select_last();
            maybe_fetch_next_page(app, tx);
        }
        KeyCode::Enter => {
            if let Some(movie) = app.selected_movie().cloned() {
                let movie_id = movie.id;
                app.open_overlay(movie);
                spawn_detail_fetch(&app.catalog, tx, movie_id);
            }
        }
        KeyCode::Char('r') => {
            // Re-run the current query and refresh the trending pane.
            let query = app.query.clone();
            app.begin_query(query.clone());
            spawn_page_fetch(&app.catalog, tx, query, 1);
            if app.config.trending_ready() {
                spawn_trending_fetch(&app.store, tx);
            }
        }
        KeyCode::Esc => {
            // Clear the search; the empty query propagates through the
            // debouncer like any other edit and flips back to discover mode.
            if !app.search_input.value().is_empty() || !app.query.is_empty() {
                app.search_input.reset();
                app.debouncer.submit(String::new(), tx.clone());
            }
        }
        _ => {}
    }
}

fn handle_overlay_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_overlay();
        }
        KeyCode::Char('t') => {
            let url = app
                .overlay
                .as_ref()
                .and_then(|o| o.trailer.as_ref())
                .map(|t| t.watch_url());
            if let Some(url) = url {
                if let Err(e) = webbrowser::open(&url) {
                    if let Some(overlay) = &mut app.overlay {
                        overlay.error = Some(format!("Could not open browser: {}", e));
                    }
                }
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AsyncAction>) {
    match key.code {
        KeyCode::Esc => {
            // Leave the input; a pending debounced emission still fires.
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            // Skip the quiet interval and search right away.
            app.input_mode = InputMode::Normal;
            app.debouncer
                .flush(app.search_input.value().to_string(), tx.clone());
        }
        _ => {
            let before = app.search_input.value().to_string();
            app.search_input.handle_event(&Event::Key(key));
            let after = app.search_input.value();
            if after != before {
                app.debouncer.submit(after.to_string(), tx.clone());
            }
        }
    }
}

/// Scroll sentinel: fires when navigation parked the selection on the last
/// row. `begin_next_page` arms at most one request per page.
pub fn maybe_fetch_next_page(app: &mut App, tx: &mpsc::Sender<AsyncAction>) {
    if app.wants_next_page() {
        if let Some(page) = app.begin_next_page() {
            spawn_page_fetch(&app.catalog, tx, app.query.clone(), page);
        }
    }
}
