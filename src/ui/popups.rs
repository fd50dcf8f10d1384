use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::colors::{DIM_GOLD, MARQUEE_GOLD};
use crate::ui::utils::centered_rect;

pub fn render_help_popup(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " keys ",
            Style::default()
                .fg(MARQUEE_GOLD)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(DIM_GOLD));

    let area = centered_rect(50, 55, area);
    f.render_widget(Clear, area);

    let shortcuts = vec![
        "",
        "  /        Focus the search box",
        "  Esc      Leave search / clear query / close popup",
        "  Enter    Open details for the selected movie",
        "  j / k    Move down / up (bottom row loads the next page)",
        "  g / G    Jump to first / last result",
        "  t        Open the trailer in your browser (in details)",
        "  r        Reload current query and trending",
        "  q        Quit",
    ];
    let paragraph = Paragraph::new(shortcuts.join("\n"))
        .style(Style::default().fg(ratatui::style::Color::White))
        .block(block);
    f.render_widget(paragraph, area);
}
