use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;
use crate::view::centered_rect;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup = centered_rect(56, 18, area);

    let lines = vec![
        Line::from(Span::styled(
            " Keyboard Shortcuts ",
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.header_bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section_header("Browsing", theme),
        key_line("j / \u{2193}", "Move down", theme),
        key_line("k / \u{2191}", "Move up", theme),
        key_line("Enter", "Watch the selected video", theme),
        key_line("Esc", "Back to the front page", theme),
        Line::from(""),
        section_header("Navigation", theme),
        key_line("/", "Type a path (e.g. /video/3)", theme),
        key_line("h", "Front page", theme),
        key_line("a", "Admin dashboard", theme),
        Line::from(""),
        section_header("Offers", theme),
        key_line("o", "Open the offer popup", theme),
        key_line("Esc / x", "Close the offer popup", theme),
        Line::from(""),
        key_line("q / Ctrl+C", "Quit", theme),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header(label: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {label}"),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, description: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("   {key:<14}"), Style::default().fg(theme.text)),
        Span::styled(description.to_string(), Style::default().fg(theme.dim)),
    ])
}
