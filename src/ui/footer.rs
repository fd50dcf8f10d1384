use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, FetchPhase, InputMode};
use crate::ui::colors::{ERROR_RED, SOFT_GOLD, TEXT_DIM, TEXT_SECONDARY};

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default()
        .fg(ratatui::style::Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(ratatui::style::Color::White);

    let mut spans = vec![
        Span::styled(" q ", key_style),
        Span::styled("Quit  ", label_style),
        Span::styled(" / ", key_style),
        Span::styled("Search  ", label_style),
        Span::styled(" ↑↓ ", key_style),
        Span::styled("Move  ", label_style),
        Span::styled(" Enter ", key_style),
        Span::styled("Details  ", label_style),
    ];

    if app.input_mode == InputMode::Editing {
        spans.push(Span::styled(" Esc ", key_style));
        spans.push(Span::styled("Stop Editing", label_style));
    } else {
        spans.push(Span::styled(" r ", key_style));
        spans.push(Span::styled("Reload  ", label_style));
        spans.push(Span::styled(" ? ", key_style));
        spans.push(Span::styled("Help", label_style));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
        area,
    );

    // Pagination status, bottom right. A failed page>1 fetch keeps the
    // accumulated rows on screen, so the message lands here instead.
    let status = match app.phase {
        FetchPhase::Error if !app.movies.is_empty() => Span::styled(
            format!(
                "{} ",
                app.error_message.as_deref().unwrap_or("Request failed.")
            ),
            Style::default().fg(ERROR_RED),
        ),
        FetchPhase::LoadingMore => Span::styled(
            "loading more… ",
            Style::default().fg(SOFT_GOLD).add_modifier(Modifier::BOLD),
        ),
        FetchPhase::Ready if !app.movies.is_empty() => Span::styled(
            format!(
                "page {}/{} · {} titles ",
                app.page,
                app.total_pages.max(app.page),
                app.movies.len()
            ),
            Style::default().fg(TEXT_SECONDARY),
        ),
        _ => Span::styled(
            if app.query.is_empty() {
                "discover mode "
            } else {
                "search mode "
            },
            Style::default().fg(TEXT_DIM),
        ),
    };

    f.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Right),
        area,
    );
}
