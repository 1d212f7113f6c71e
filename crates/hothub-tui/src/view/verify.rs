use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;
use crate::view::centered_rect;

/// Render the age-verification prompt as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup = centered_rect(52, 9, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  This site contains adult content.",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  You must be 18 or older to enter.",
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  y",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(": I am 18 or older   ", Style::default().fg(theme.dim)),
            Span::styled(
                "n",
                Style::default()
                    .fg(theme.danger)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(": leave", Style::default().fg(theme.dim)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Your answer is remembered on this device.",
            Style::default().fg(theme.dim),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Age Verification "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
