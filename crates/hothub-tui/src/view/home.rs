use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::view::truncate;

/// Render the home grid: one row per catalog entry.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let title_width = (area.width as usize).saturating_sub(30).max(12);

    let mut lines: Vec<Line> = Vec::new();
    for (i, video) in app.catalog.iter().enumerate() {
        let marker = if i == app.home_cursor { "\u{25B6} " } else { "  " };
        let row_style = if i == app.home_cursor {
            theme.highlight_style()
        } else {
            Style::default().fg(theme.text)
        };

        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.accent)),
            Span::styled(
                format!("{:<w$}", truncate(&video.title, title_width), w = title_width),
                row_style,
            ),
            Span::styled(format!(" {:>6}", video.duration), Style::default().fg(theme.dim)),
            Span::styled(
                format!(" {:>9} views", video.views),
                Style::default().fg(theme.dim),
            ),
            Span::styled(format!("  {}", video.tag), Style::default().fg(theme.accent)),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Nothing here yet.",
            Style::default().fg(theme.dim),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Trending "),
    );
    f.render_widget(paragraph, area);
}
