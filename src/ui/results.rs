use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, FetchPhase};
use crate::ui::colors::{
    DIM_GOLD, ERROR_RED, HIGHLIGHT_BG, MARQUEE_GOLD, SOFT_GOLD, TEXT_DIM, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::ui::utils::{get_rating_color, title_carries_year};

pub fn render_results_pane(f: &mut Frame, app: &mut App, area: Rect) {
    let title = if app.query.is_empty() {
        format!(" all movies ({}) ", app.movies.len())
    } else {
        format!(" results for \"{}\" ({}) ", app.query, app.movies.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIM_GOLD))
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            title,
            Style::default().fg(SOFT_GOLD).add_modifier(Modifier::BOLD),
        ));

    // First-page failures clear the list, so the pane itself carries the
    // generic message.
    if app.phase == FetchPhase::Error && app.movies.is_empty() {
        let message = app
            .error_message
            .as_deref()
            .unwrap_or("Something went wrong.");
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(ERROR_RED),
            )))
            .alignment(Alignment::Center)
            .block(block),
            area,
        );
        return;
    }

    if app.movies.is_empty() {
        let hint = match app.phase {
            FetchPhase::Idle | FetchPhase::LoadingFirstPage => "Loading ...",
            _ => "No movies found.",
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(TEXT_DIM))))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    // Window the list around the selection so huge result sets stay cheap.
    let visible_height = area.height.saturating_sub(2) as usize;
    let total = app.movies.len();
    let selected = app.selected_index;

    let half_window = visible_height / 2;
    let start = if selected > half_window {
        selected - half_window
    } else {
        0
    };
    let end = (start + visible_height + half_window).min(total);
    let adjusted_start = if end == total && end > visible_height + half_window {
        end.saturating_sub(visible_height + half_window)
    } else {
        start
    };

    let items: Vec<ListItem> = app
        .movies
        .iter()
        .enumerate()
        .skip(adjusted_start)
        .take(end - adjusted_start)
        .map(|(_, movie)| {
            let mut spans = vec![Span::styled("◆ ", Style::default().fg(SOFT_GOLD))];

            let mut label = movie.title.clone();
            let year = movie.release_year();
            if year != "N/A" && !title_carries_year(&label) {
                label.push_str(" (");
                label.push_str(&year);
                label.push(')');
            }
            spans.push(Span::styled(label, Style::default().fg(TEXT_PRIMARY)));

            spans.push(Span::styled(
                format!(" ★{}", movie.rating_label()),
                Style::default().fg(get_rating_color(movie.vote_average)),
            ));
            spans.push(Span::styled(
                format!(" {}", movie.language_label()),
                Style::default().fg(TEXT_SECONDARY),
            ));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(HIGHLIGHT_BG)
                .fg(MARQUEE_GOLD)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" ▎");

    let mut adjusted_state = app.list_state.clone();
    if adjusted_start > 0 {
        adjusted_state.select(Some(selected - adjusted_start));
    }
    f.render_stateful_widget(list, area, &mut adjusted_state);
}
