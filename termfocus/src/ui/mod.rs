//! Terminal UI rendering.

pub mod input_box;
pub mod status_bar;
pub mod task_panel;
pub mod theme;
pub mod timer_panel;
pub mod tips_panel;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Timer on top, input below it, task area in the middle, status bar
    // at the bottom.
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    timer_panel::render(frame, main_chunks[0], app);
    input_box::render(frame, main_chunks[1], app);

    // Task list, optionally sharing the row with the tips panel.
    if app.show_tips {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[2]);
        task_panel::render(frame, content_chunks[0], app);
        tips_panel::render(frame, content_chunks[1]);
    } else {
        task_panel::render(frame, main_chunks[2], app);
    }

    status_bar::render(frame, main_chunks[3], app);
}
