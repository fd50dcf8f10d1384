use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::colors::{DIM_GOLD, MARQUEE_GOLD, SOFT_GOLD, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};

/// Top search terms from the popularity store, highest count first.
pub fn render_trending_pane(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIM_GOLD))
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " trending ",
            Style::default().fg(SOFT_GOLD).add_modifier(Modifier::BOLD),
        ));

    let mut lines = Vec::new();

    if !app.config.trending_ready() {
        lines.push(Line::from(Span::styled(
            "Trending store not configured.",
            Style::default().fg(TEXT_DIM),
        )));
    } else if app.trending.is_empty() {
        let hint = app.trending_note.as_deref().unwrap_or("Nothing trending yet.");
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(TEXT_DIM),
        )));
    } else {
        for (rank, entry) in app.trending.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}. ", rank + 1),
                    Style::default()
                        .fg(MARQUEE_GOLD)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(entry.search_term.clone(), Style::default().fg(TEXT_PRIMARY)),
                Span::styled(
                    format!("  ×{}", entry.count),
                    Style::default().fg(TEXT_SECONDARY),
                ),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
