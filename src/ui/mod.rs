pub mod colors;
pub mod detail;
pub mod footer;
pub mod header;
pub mod loading;
pub mod popups;
pub mod results;
pub mod trending;
pub mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, FetchPhase};
use crate::ui::utils::calculate_results_split;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header / search
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    footer::render_footer(f, app, chunks[2]);

    let (results_width, trending_width) = calculate_results_split(chunks[1].width);
    if trending_width == 0 {
        results::render_results_pane(f, app, chunks[1]);
    } else {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(results_width),
                Constraint::Length(trending_width),
            ])
            .split(chunks[1]);

        results::render_results_pane(f, app, h_chunks[0]);
        trending::render_trending_pane(f, app, h_chunks[1]);
    }

    // Overlays
    if app.phase == FetchPhase::LoadingFirstPage {
        loading::render_loading(f, app, area);
    }

    if app.overlay.is_some() {
        detail::render_detail_overlay(f, app, area);
    }

    if app.show_help {
        popups::render_help_popup(f, area);
    }
}
