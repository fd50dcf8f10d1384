use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::ui::colors::{DIM_GOLD, MARQUEE_GOLD, SOFT_GOLD, TEXT_DIM, TEXT_PRIMARY};

const SEARCH_PLACEHOLDER: &str = "Search through thousands of movies (press '/' to focus)";

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let is_editing = app.input_mode == InputMode::Editing;
    let border_color = if is_editing { SOFT_GOLD } else { DIM_GOLD };

    let title = Line::from(vec![
        Span::styled(
            " REELSCOPE ",
            Style::default()
                .fg(MARQUEE_GOLD)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("find the movies you'll enjoy ", Style::default().fg(TEXT_DIM)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(title);

    let value = app.search_input.value();
    let content = if value.is_empty() && !is_editing {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(TEXT_DIM)))
    } else {
        Line::from(vec![
            Span::styled("⌕ ", Style::default().fg(SOFT_GOLD)),
            Span::styled(value, Style::default().fg(TEXT_PRIMARY)),
        ])
    };

    let inner = block.inner(area);
    f.render_widget(Paragraph::new(content).block(block), area);

    if is_editing {
        let cursor_x = inner.x + 2 + app.search_input.visual_cursor() as u16;
        f.set_cursor_position(Position::new(cursor_x.min(inner.right()), inner.y));
    }
}
