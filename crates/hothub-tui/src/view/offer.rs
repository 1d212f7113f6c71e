use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;
use crate::view::centered_rect;

/// Render the promotional overlay as a centered popup.
pub fn render_popup(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup = centered_rect(46, 8, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  \u{2605} 50% OFF PREMIUM \u{2605}",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  First month half price. Today only.",
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Esc",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(": no thanks", Style::default().fg(theme.dim)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Special Offer "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Render the floating trigger badge in the bottom-right corner. Returns the
/// area it occupies so clicks can be mapped back to it.
pub fn render_trigger(f: &mut Frame, theme: &Theme, area: Rect) -> Rect {
    let label = " % OFFER ";
    let width = label.len() as u16;
    let badge = Rect {
        x: area.x + area.width.saturating_sub(width + 2),
        y: area.y + area.height.saturating_sub(2),
        width: width.min(area.width),
        height: 1.min(area.height),
    };

    let line = Line::from(Span::styled(
        label,
        Style::default()
            .fg(theme.header_fg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Clear, badge);
    f.render_widget(Paragraph::new(line), badge);

    badge
}
