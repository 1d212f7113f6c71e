use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::catalog;

/// Render the video details page. The player itself is an external embed;
/// this page frames it and shows whatever attribution the embed left behind
/// after the janitor's sweep.
pub fn render_in(f: &mut Frame, app: &App, id: &str, area: Rect) {
    let theme = &app.theme;

    let Some(video) = catalog::find(&app.catalog, id) else {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  No such video: {id}"),
                Style::default().fg(theme.warning),
            )),
            Line::from(Span::styled(
                "  Esc: back to browsing",
                Style::default().fg(theme.dim),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", video.title),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {} \u{00B7} {} views \u{00B7} {}", video.duration, video.views, video.tag),
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  \u{2595}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{258F}",
            Style::default().fg(theme.accent),
        )),
        Line::from(Span::styled(
            "  \u{25B6} streaming via external embed",
            Style::default().fg(theme.text),
        )),
        Line::from(""),
    ];

    for label in app.badges.visible_labels() {
        lines.push(Line::from(Span::styled(
            format!("  {label}"),
            Style::default().fg(theme.dim),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Now Playing "),
    );
    f.render_widget(paragraph, area);
}
