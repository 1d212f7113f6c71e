use std::time::Duration;

use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::SPLASH_DURATION;
use crate::theme::Theme;
use crate::view::centered_rect;

const BANNER_ART: &[&str] = &[
    r" _   _       _     _   _       _     ",
    r"| | | | ___ | |_  | | | |_   _| |__  ",
    r"| |_| |/ _ \| __| | |_| | | | | '_ \ ",
    r"|  _  | (_) | |_  |  _  | |_| | |_) |",
    r"|_| |_|\___/ \__| |_| |_|\__,_|_.__/ ",
];

/// Render the splash intro as a centered overlay.
pub fn render(f: &mut Frame, theme: &Theme, tick: usize, elapsed: Duration) {
    let area = f.area();

    // Don't render if terminal too narrow
    if area.width < 50 || area.height < 13 {
        return;
    }

    let popup = centered_rect(50, 12, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    for art_line in BANNER_ART {
        lines.push(Line::from(Span::styled(
            *art_line,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));

    // Progress bar filled by intro elapsed time
    let total = SPLASH_DURATION.as_millis().max(1);
    let done = elapsed.as_millis().min(total);
    let filled = (done * 30 / total) as usize;
    lines.push(Line::from(Span::styled(
        format!("   [{}{}]", "\u{2501}".repeat(filled), " ".repeat(30 - filled)),
        Style::default().fg(theme.accent),
    )));

    let dots = ".".repeat((tick % 4) + 1);
    lines.push(Line::from(Span::styled(
        format!("   warming up the projector{dots:<4}"),
        Style::default().fg(theme.dim),
    )));
    lines.push(Line::from(Span::styled(
        "   18+ content ahead \u{2014} any key to skip",
        Style::default().fg(theme.dim),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    f.render_widget(paragraph, popup);
}
