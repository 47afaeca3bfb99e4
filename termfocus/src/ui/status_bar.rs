//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use termfocus_core::format_mm_ss;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.focus {
        PanelFocus::Input => "Enter: add task | Tab: switch panel | Esc: quit | ←→: move cursor",
        PanelFocus::Tasks => {
            "Tab: switch panel | ↑↓/jk: navigate | Space: toggle | p: priority | d: delete | f: filter | Esc: quit"
        }
        PanelFocus::Timer => "Tab: switch panel | s: start | r: reset | Esc: quit",
    };

    let (dot_color, timer_text) = if app.timer.is_running() {
        (
            theme::SUCCESS,
            format!("{} focus", format_mm_ss(app.timer.remaining_secs())),
        )
    } else if app.timer.is_expired() {
        (theme::ERROR, "session over".to_string())
    } else {
        (theme::IDLE, "idle".to_string())
    };

    let clock = chrono::Local::now().format("%H:%M").to_string();

    let status_line = Line::from(vec![
        Span::styled("TermFocus v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::styled("●", theme::normal().fg(dot_color)),
        Span::raw(format!(" {timer_text}")),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
        Span::raw(" | "),
        Span::styled(clock, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
