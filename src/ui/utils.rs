use once_cell::sync::Lazy;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use regex::Regex;

static TITLE_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\(\[](19|20)\d{2}[\)\]]").expect("title year regex should compile")
});

/// Some catalog titles already end in "(1989)"; appending the release year
/// again would double it up.
pub fn title_carries_year(title: &str) -> bool {
    TITLE_YEAR_RE.is_match(title)
}

/// Results pane gets the remainder after a fixed-width trending column,
/// unless the terminal is too narrow to afford one.
pub fn calculate_results_split(total_width: u16) -> (u16, u16) {
    let trending_width = 34;
    if total_width < trending_width + 50 {
        (total_width, 0)
    } else {
        (total_width - trending_width, trending_width)
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn get_rating_color(rating: Option<f64>) -> ratatui::style::Color {
    match rating {
        Some(r) if r >= 8.0 => ratatui::style::Color::Green,
        Some(r) if r >= 6.0 => ratatui::style::Color::White,
        Some(r) if r >= 4.0 => ratatui::style::Color::LightYellow,
        Some(_) => ratatui::style::Color::Red,
        None => ratatui::style::Color::White,
    }
}
