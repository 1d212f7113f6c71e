use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use hothub_core::Route;

use crate::theme::Theme;

/// Persistent brand bar with the address line. Returns the remaining
/// content area below it.
pub fn render_header(f: &mut Frame, area: Rect, theme: &Theme, route: &Route) -> Rect {
    let header_area = Rect {
        height: 1.min(area.height),
        ..area
    };

    let line = Line::from(vec![
        Span::styled(" HOTHUB ", theme.header_style()),
        Span::styled(format!("  {}", route.path()), Style::default().fg(theme.text)),
    ]);
    f.render_widget(Paragraph::new(line), header_area);

    let badge = Line::from(Span::styled(" 18+ ", theme.header_style())).alignment(Alignment::Right);
    f.render_widget(Paragraph::new(badge), header_area);

    Rect {
        y: area.y + header_area.height,
        height: area.height.saturating_sub(header_area.height),
        ..area
    }
}

/// Footer key hints for the current route.
pub fn render_footer(f: &mut Frame, area: Rect, theme: &Theme, route: &Route) {
    let hints = match route {
        Route::Home => "j/k: browse  Enter: watch  /: go to  a: admin  o: offer  ?: help  q: quit",
        Route::Video(_) => "Esc: back  /: go to  o: offer  ?: help  q: quit",
        Route::Admin | Route::AdminLogin => "Esc: back  /: go to  q: quit",
        Route::NotFound(_) => "h: home  /: go to  q: quit",
    };
    let line = Line::from(Span::styled(format!(" {hints}"), theme.footer_style()));
    f.render_widget(Paragraph::new(line), area);
}
