use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::theme::Theme;

/// Render the address-entry line over the footer row.
pub fn render(f: &mut Frame, theme: &Theme, buffer: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " go to ",
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {buffer}"), Style::default().fg(theme.text)),
        Span::styled("\u{258C}", Style::default().fg(theme.accent)),
    ]);

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(line), area);
}
