use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::colors::{MARQUEE_GOLD, SOFT_GOLD, TEXT_PRIMARY};
use crate::ui::utils::centered_rect;

const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Centered popup shown while the first page of a query is in flight.
/// Page>1 loads keep the list on screen and only mark the footer.
pub fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(40, 14, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SOFT_GOLD));

    let tick = app.loading_tick;
    let spinner = SPINNER_CHARS[(tick % SPINNER_CHARS.len() as u64) as usize];
    let dots = ".".repeat(((tick / 8) % 4) as usize);

    let message = if app.query.is_empty() {
        "Fetching popular movies"
    } else {
        "Searching the catalog"
    };

    let text = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", spinner), Style::default().fg(MARQUEE_GOLD)),
        Span::styled(
            message,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(dots, Style::default().fg(SOFT_GOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(text, popup_area);
}
