use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use hothub_core::LoadState;

use crate::app::App;

/// Render the admin login page. Part of the same lazily-loaded subtree as
/// the dashboard, so it shares the loading placeholder.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    match app.admin.state() {
        LoadState::Ready(_) => {}
        LoadState::Failed(error) => {
            let popup = crate::view::centered_rect(44, 4, area);
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    " admin module failed to load",
                    Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(" {error}"),
                    Style::default().fg(theme.dim),
                )),
            ];
            f.render_widget(Paragraph::new(lines), popup);
            return;
        }
        LoadState::NotRequested | LoadState::Pending => {
            super::admin::render_placeholder(f, theme, app.tick, area);
            return;
        }
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Moderator sign-in",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("  username  [________________]", Style::default().fg(theme.dim))),
        Line::from(Span::styled("  password  [________________]", Style::default().fg(theme.dim))),
        Line::from(""),
        Line::from(Span::styled(
            "  Credentials are checked by the admin backend.",
            Style::default().fg(theme.dim),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Admin Login "),
    );
    f.render_widget(paragraph, area);
}
