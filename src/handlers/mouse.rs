use crossterm::event::{MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::app::{App, AsyncAction};
use crate::handlers::input::maybe_fetch_next_page;

/// Wheel scrolling drives the same selection path as the arrow keys, so
/// reaching the bottom of the list arms the next-page fetch either way.
pub fn handle_mouse(app: &mut App, event: MouseEvent, tx: &mpsc::Sender<AsyncAction>) {
    if app.overlay.is_some() || app.show_help {
        return;
    }
    match event.kind {
        MouseEventKind::ScrollDown => {
            app.select_next();
            maybe_fetch_next_page(app, tx);
        }
        MouseEventKind::ScrollUp => {
            app.select_previous();
        }
        _ => {}
    }
}
