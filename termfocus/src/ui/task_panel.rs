//! Task list rendering: filter tabs plus the filtered task rows.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
};

use termfocus_core::{Filter, Task};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the task panel (filter tabs + visible task list).
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;

    let visible = app.visible_tasks();
    let title = format!("Tasks ({}/{})", visible.len(), app.store.len());
    let block = Block::default()
        .title(Span::styled(title, theme::panel_title(theme::TASKS_TITLE)))
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
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    render_filter_tabs(frame, chunks[0], app.filter);

    if visible.is_empty() {
        let placeholder = if app.store.is_empty() {
            "No tasks yet. Add a task to get started!"
        } else {
            "Nothing matches this filter."
        };
        let paragraph = Paragraph::new(Span::styled(placeholder, theme::empty_state()));
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| task_row(task, idx == app.selected_task, is_focused))
        .collect();
    frame.render_widget(List::new(items), chunks[1]);
}

/// Render the All/Active/Completed filter tabs.
fn render_filter_tabs(frame: &mut Frame, area: Rect, filter: Filter) {
    let selected = match filter {
        Filter::All => 0,
        Filter::Active => 1,
        Filter::Completed => 2,
    };
    let tabs = Tabs::new(vec!["All Tasks", "Active", "Completed"])
        .style(theme::dimmed())
        .highlight_style(theme::highlighted())
        .select(selected);
    frame.render_widget(tabs, area);
}

/// Build one task row: checkbox, priority marker, text.
fn task_row(task: &Task, is_selected: bool, panel_focused: bool) -> ListItem<'_> {
    let checkbox = if task.completed { "[✓]" } else { "[ ]" };
    let text_style = if task.completed {
        theme::completed_task()
    } else {
        theme::normal()
    };

    let line = Line::from(vec![
        Span::styled(checkbox, text_style),
        Span::raw(" "),
        Span::styled(
            "▍",
            theme::normal().fg(theme::priority_color(task.priority)),
        ),
        Span::styled(task.text.as_str(), text_style),
        Span::raw(" "),
        Span::styled(format!("({})", task.priority), theme::dimmed()),
    ]);

    let style = if is_selected && panel_focused {
        theme::selected()
    } else if is_selected {
        theme::highlighted()
    } else {
        theme::normal()
    };

    ListItem::new(line).style(style)
}
