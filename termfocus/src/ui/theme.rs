//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

use termfocus_core::Priority;

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Success/running indicator color.
pub const SUCCESS: Color = Color::Green;

/// Warning indicator color.
pub const WARNING: Color = Color::Yellow;

/// Error/expired indicator color.
pub const ERROR: Color = Color::Red;

/// Idle indicator color.
pub const IDLE: Color = Color::DarkGray;

/// High priority marker color.
pub const PRIORITY_HIGH: Color = Color::Red;

/// Medium priority marker color.
pub const PRIORITY_MEDIUM: Color = Color::Yellow;

/// Low priority marker color.
pub const PRIORITY_LOW: Color = Color::Green;

/// Panel title color for the timer panel.
pub const TIMER_TITLE: Color = Color::Red;

/// Panel title color for the input panel.
pub const INPUT_TITLE: Color = Color::Blue;

/// Panel title color for the tasks panel.
pub const TASKS_TITLE: Color = Color::Green;

/// Panel title color for the tips panel.
pub const TIPS_TITLE: Color = Color::Magenta;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (metadata, disabled controls).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for completed task text (struck through, dimmed).
#[must_use]
pub fn completed_task() -> Style {
    Style::default()
        .fg(FG_SECONDARY)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Style for the empty-list placeholder (dim italics).
#[must_use]
pub fn empty_state() -> Style {
    Style::default()
        .fg(FG_SECONDARY)
        .add_modifier(Modifier::ITALIC)
}

/// Style for the completion banner.
#[must_use]
pub fn notification() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(WARNING)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background.
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Marker color for a task priority.
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => PRIORITY_HIGH,
        Priority::Medium => PRIORITY_MEDIUM,
        Priority::Low => PRIORITY_LOW,
    }
}
