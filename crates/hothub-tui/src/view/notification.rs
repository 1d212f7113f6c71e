use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::app::App;
use crate::theme::Theme;
use crate::view::truncate;

/// Rotating purchase notices shown on non-admin routes.
pub const PURCHASES: &[&str] = &[
    "Alex from Berlin unlocked Premium",
    "Sam from Austin bought a 1-year pass",
    "Yuki from Osaka unlocked Premium",
    "Lena from Warsaw tipped a creator",
    "Marco from Lisbon bought a day pass",
    "Priya from Mumbai unlocked Premium",
];

/// Bottom-left purchase ticker (first toast surface).
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let notice = PURCHASES[app.purchase_index % PURCHASES.len()];
    let text = format!(" \u{25CF} {} ", truncate(notice, (area.width as usize).saturating_sub(5)));
    let width = (text.len() as u16).min(area.width.saturating_sub(1));

    let strip = Rect {
        x: area.x + 1,
        y: area.y + area.height.saturating_sub(2),
        width,
        height: 1.min(area.height),
    };

    let line = Line::from(Span::styled(
        text,
        Style::default().fg(theme.dim).bg(theme.highlight_bg),
    ));
    f.render_widget(Clear, strip);
    f.render_widget(Paragraph::new(line), strip);
}

/// Top-right transient toast (second surface, independent of the ticker).
pub fn render_toast(f: &mut Frame, theme: &Theme, message: &str, area: Rect) {
    let text = format!(" {message} ");
    let width = (text.len() as u16).min(area.width);

    let strip = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y,
        width,
        height: 1.min(area.height),
    };

    let line = Line::from(Span::styled(text, theme.header_style()));
    f.render_widget(Clear, strip);
    f.render_widget(Paragraph::new(line), strip);
}
