//! Application state and event handling.
//!
//! [`App`] owns the task store, the countdown timer, and the ephemeral view
//! state (input buffer, filter, selection, focus). Key events mutate state
//! directly; timer scheduling is delegated to the run loop via
//! [`TimerCommand`] so that the single tick source stays in one owner's
//! hands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use termfocus_core::{CountdownTimer, Filter, TaskId, TaskStore, TickOutcome};

/// Message shown when the countdown reaches zero.
const SESSION_COMPLETE_MSG: &str = "Focus session complete! Take a 5-minute break.";

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input box is focused (default).
    Input,
    /// Task list is focused.
    Tasks,
    /// Timer controls are focused.
    Timer,
}

/// Tick-source request returned from key handling.
///
/// The run loop owns the one live ticker; the app only tells it when the
/// timer state asks for ticks to start or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Spawn the one-second tick source.
    StartTicking,
    /// Cancel the tick source.
    StopTicking,
}

/// Main application state.
pub struct App {
    /// All tasks, in insertion order.
    pub store: TaskStore,
    /// The Pomodoro countdown.
    pub timer: CountdownTimer,
    /// Which tasks are visible. View-only; never touches the store.
    pub filter: Filter,
    /// Current text input.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected index within the visible (filtered) task list.
    pub selected_task: usize,
    /// Completion banner; blocks input until dismissed by a keypress.
    pub notification: Option<String>,
    /// Whether the tips panel is rendered.
    pub show_tips: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates an empty application.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
            timer: CountdownTimer::new(),
            filter: Filter::All,
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected_task: 0,
            notification: None,
            show_tips: true,
            should_quit: false,
        }
    }

    /// Sets whether the tips panel is rendered.
    #[must_use]
    pub const fn with_show_tips(mut self, show_tips: bool) -> Self {
        self.show_tips = show_tips;
        self
    }

    /// Handle a key event.
    ///
    /// Returns a [`TimerCommand`] when the run loop must start or stop the
    /// tick source.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<TimerCommand> {
        // A pending completion banner swallows the next keypress, like the
        // blocking alert it replaces. Ctrl-C still quits.
        if self.notification.is_some() {
            if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
                self.should_quit = true;
            } else {
                self.notification = None;
            }
            return None;
        }

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return None;
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.cycle_focus_backward();
                return None;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return None;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Input => {
                self.handle_input_key(key);
                None
            }
            PanelFocus::Tasks => {
                self.handle_tasks_key(key);
                None
            }
            PanelFocus::Timer => self.handle_timer_key(key),
        }
    }

    /// Handle key event when the input box is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('p') => self.cycle_selected_priority(),
            KeyCode::Char('f') => self.cycle_filter(),
            _ => {}
        }
    }

    /// Handle key event when the timer panel is focused.
    fn handle_timer_key(&mut self, key: KeyEvent) -> Option<TimerCommand> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => self.start_timer(),
            KeyCode::Char('r') => Some(self.reset_timer()),
            _ => None,
        }
    }

    /// Starts the countdown, if it is not already running or expired.
    ///
    /// Returns [`TimerCommand::StartTicking`] only on an actual transition,
    /// so a start request while running never spawns a second tick source.
    pub fn start_timer(&mut self) -> Option<TimerCommand> {
        if self.timer.start() {
            tracing::info!("focus session started");
            Some(TimerCommand::StartTicking)
        } else {
            None
        }
    }

    /// Stops the countdown and restores the full session.
    pub fn reset_timer(&mut self) -> TimerCommand {
        self.timer.reset();
        tracing::info!("timer reset");
        TimerCommand::StopTicking
    }

    /// Applies one tick to the countdown.
    ///
    /// On expiry, raises the completion banner exactly once. The caller
    /// cancels the tick source when this returns [`TickOutcome::Expired`].
    pub fn apply_tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick();
        if outcome == TickOutcome::Expired {
            tracing::info!("focus session complete");
            self.notification = Some(SESSION_COMPLETE_MSG.to_string());
        }
        outcome
    }

    /// Tasks visible under the current filter, in insertion order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&termfocus_core::Task> {
        self.store.filtered(self.filter)
    }

    /// Id of the task currently selected in the visible list.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.selected_task).map(|t| t.id)
    }

    /// Cycle focus forward: Input -> Tasks -> Timer -> Input.
    pub const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Timer,
            PanelFocus::Timer => PanelFocus::Input,
        };
    }

    /// Cycle focus backward: Input -> Timer -> Tasks -> Input.
    pub const fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Timer,
            PanelFocus::Timer => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
        };
    }

    /// Advances the filter and re-clamps the selection to the new view.
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.cycle();
        self.clamp_selection();
    }

    /// Submit the current input as a new task.
    ///
    /// The input field is cleared only on success; a whitespace-only entry
    /// is silently rejected and left in place.
    fn submit_task(&mut self) {
        match self.store.add(&self.input) {
            Ok(task) => {
                tracing::debug!(id = %task.id, "task added");
                self.input.clear();
                self.cursor_position = 0;
            }
            Err(_) => {
                // Empty text: a normal, silent rejection.
            }
        }
    }

    /// Toggle completion of the selected task.
    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            // The id came from the visible list, so the toggle cannot miss.
            let _ = self.store.toggle(id);
            self.clamp_selection();
        }
    }

    /// Delete the selected task.
    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            let _ = self.store.remove(id);
            self.clamp_selection();
        }
    }

    /// Cycle the priority of the selected task.
    fn cycle_selected_priority(&mut self) {
        if let Some(id) = self.selected_task_id()
            && let Some(task) = self.store.get(id)
        {
            let next = task.priority.cycle();
            let _ = self.store.set_priority(id, next);
        }
    }

    /// Keep the selection inside the visible list after it shrinks.
    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if self.selected_task >= len {
            self.selected_task = len.saturating_sub(1);
        }
    }

    /// Select the previous visible task.
    pub const fn select_previous(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    /// Select the next visible task.
    pub fn select_next(&mut self) {
        if self.selected_task + 1 < self.visible_tasks().len() {
            self.selected_task += 1;
        }
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let index = self.byte_index(self.cursor_position);
        self.input.insert(index, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let index = self.byte_index(self.cursor_position - 1);
            self.input.remove(index);
            self.cursor_position -= 1;
        }
    }

    /// Move cursor left.
    pub const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Byte offset of the given character index in the input buffer.
    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(i, _)| i)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
