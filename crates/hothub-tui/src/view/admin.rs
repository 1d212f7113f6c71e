use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use hothub_core::LoadState;

use crate::app::App;
use crate::theme::Theme;
use crate::view::{centered_rect, spinner_char};

/// Render the admin dashboard, or the loading placeholder while the module
/// is still on its way.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let module = match app.admin.state() {
        LoadState::Ready(module) => module,
        LoadState::Failed(error) => {
            render_load_failure(f, theme, error, area);
            return;
        }
        LoadState::NotRequested | LoadState::Pending => {
            render_placeholder(f, theme, app.tick, area);
            return;
        }
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} videos published", module.total_videos),
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            format!("  {} awaiting review", module.pending_review),
            Style::default().fg(theme.warning),
        )),
        Line::from(Span::styled(
            format!("  {} flagged comments", module.flagged_comments),
            Style::default().fg(theme.danger),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Recent uploads",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
    ];
    for upload in &module.recent_uploads {
        lines.push(Line::from(Span::styled(
            format!("    \u{00B7} {upload}"),
            Style::default().fg(theme.dim),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Admin "),
    );
    f.render_widget(paragraph, area);
}

/// Centered spinner shown in place of an admin destination while its module
/// loads.
pub fn render_placeholder(f: &mut Frame, theme: &Theme, tick: usize, area: Rect) {
    let popup = centered_rect(30, 3, area);
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", spinner_char(tick)),
            Style::default().fg(theme.accent),
        ),
        Span::styled("loading admin module", Style::default().fg(theme.dim)),
    ]);
    f.render_widget(Paragraph::new(vec![Line::from(""), line]), popup);
}

fn render_load_failure(f: &mut Frame, theme: &Theme, error: &str, area: Rect) {
    let popup = centered_rect(44, 4, area);
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
}
