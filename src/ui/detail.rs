use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::colors::{
    ERROR_RED, MARQUEE_GOLD, SOFT_GOLD, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::utils::{centered_rect, get_rating_color};

const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_detail_overlay(f: &mut Frame, app: &App, area: Rect) {
    let Some(overlay) = &app.overlay else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SOFT_GOLD))
        .title(Span::styled(
            " details ",
            Style::default()
                .fg(MARQUEE_GOLD)
                .add_modifier(Modifier::BOLD),
        ));

    let area = centered_rect(70, 70, area);
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        overlay.movie.title.clone(),
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));

    if overlay.loading {
        let spinner = SPINNER_CHARS[(app.loading_tick % SPINNER_CHARS.len() as u64) as usize];
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", spinner), Style::default().fg(MARQUEE_GOLD)),
            Span::styled("Loading ...", Style::default().fg(TEXT_SECONDARY)),
        ]));
    } else if let Some(error) = &overlay.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(ERROR_RED),
        )));
    } else if let Some(details) = &overlay.details {
        // year • runtime • language
        let mut meta = vec![Span::styled(
            overlay.movie.release_year(),
            Style::default().fg(TEXT_SECONDARY),
        )];
        if let Some(runtime) = details.runtime {
            meta.push(Span::styled(" • ", Style::default().fg(TEXT_DIM)));
            meta.push(Span::styled(
                format!("{} min", runtime),
                Style::default().fg(TEXT_SECONDARY),
            ));
        }
        meta.push(Span::styled(" • ", Style::default().fg(TEXT_DIM)));
        meta.push(Span::styled(
            overlay.movie.language_label().to_string(),
            Style::default().fg(TEXT_SECONDARY),
        ));
        meta.push(Span::styled(
            format!("   ★{}", overlay.movie.rating_label()),
            Style::default().fg(get_rating_color(overlay.movie.vote_average)),
        ));
        lines.push(Line::from(meta));

        if !details.genres.is_empty() {
            let genres = details
                .genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(" / ");
            lines.push(Line::from(Span::styled(
                genres,
                Style::default().fg(SOFT_GOLD),
            )));
        }

        if let Some(tagline) = details.tagline.as_deref().filter(|t| !t.is_empty()) {
            lines.push(Line::from(Span::styled(
                tagline.to_string(),
                Style::default()
                    .fg(TEXT_DIM)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        lines.push(Line::from(""));
        if let Some(overview) = details.overview.as_deref().filter(|o| !o.is_empty()) {
            lines.push(Line::from(Span::styled(
                "Overview",
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                overview.to_string(),
                Style::default().fg(TEXT_SECONDARY),
            )));
        }

        lines.push(Line::from(""));
        match &overlay.trailer {
            Some(trailer) => {
                lines.push(Line::from(vec![
                    Span::styled(
                        " t ",
                        Style::default()
                            .fg(ratatui::style::Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("Watch trailer: ", Style::default().fg(TEXT_PRIMARY)),
                    Span::styled(trailer.name.clone(), Style::default().fg(SOFT_GOLD)),
                ]));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "No trailer available",
                    Style::default().fg(TEXT_DIM),
                )));
            }
        }

        lines.push(Line::from(Span::styled(
            overlay.movie.poster_url(),
            Style::default().fg(TEXT_DIM),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(TEXT_DIM),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}
