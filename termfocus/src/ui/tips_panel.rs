//! Static time-management tips panel.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::theme;

/// The tips shown beside the task list.
const TIPS: [&str; 5] = [
    "Break large tasks into smaller, manageable steps",
    "Use the Pomodoro Technique: 25 minutes of focused work, then a 5-minute break",
    "Prioritize tasks using the high/medium/low priority system",
    "Remove or delegate tasks that aren't essential",
    "Take regular breaks to maintain productivity",
];

/// Render the tips panel.
pub fn render(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = TIPS
        .iter()
        .map(|tip| {
            let line = Line::from(vec![
                Span::styled("• ", theme::normal().fg(theme::TIPS_TITLE)),
                Span::styled(*tip, theme::dimmed()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(
            "Time Management Tips",
            theme::panel_title(theme::TIPS_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(theme::normal());

    frame.render_widget(List::new(items).block(block), area);
}
