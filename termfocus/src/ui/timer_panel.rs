//! Pomodoro timer panel rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use termfocus_core::format_mm_ss;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the timer panel: remaining time, progress gauge, controls.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Timer;

    let block = Block::default()
        .title(Span::styled(
            "Pomodoro Timer",
            theme::panel_title(theme::TIMER_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_clock(frame, chunks[0], app);

    let gauge = Gauge::default()
        .gauge_style(theme::normal().fg(theme::TIMER_TITLE))
        .ratio(app.timer.progress());
    frame.render_widget(gauge, chunks[1]);

    // The banner takes over the controls line until dismissed.
    if let Some(message) = &app.notification {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(format!(" {message} "), theme::notification()),
            Span::styled(" press any key", theme::dimmed()),
        ]));
        frame.render_widget(banner, chunks[2]);
    } else {
        render_controls(frame, chunks[2], app);
    }
}

/// Render the formatted remaining time and the running-state dot.
fn render_clock(frame: &mut Frame, area: Rect, app: &App) {
    let (dot_color, state_text) = if app.timer.is_running() {
        (theme::SUCCESS, "running")
    } else if app.timer.is_expired() {
        (theme::ERROR, "expired")
    } else {
        (theme::IDLE, "idle")
    };

    let line = Line::from(vec![
        Span::styled(format_mm_ss(app.timer.remaining_secs()), theme::bold()),
        Span::raw("  "),
        Span::styled("●", theme::normal().fg(dot_color)),
        Span::styled(format!(" {state_text}"), theme::dimmed()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the start/reset hints; start is dimmed while running.
fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let start_style = if app.timer.is_running() {
        // Visually disabled: a start request while running is a no-op.
        theme::dimmed()
    } else {
        theme::normal().fg(theme::SUCCESS)
    };

    let line = Line::from(vec![
        Span::styled("s: start", start_style),
        Span::raw("  "),
        Span::styled("r: reset", theme::normal().fg(theme::ERROR)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
