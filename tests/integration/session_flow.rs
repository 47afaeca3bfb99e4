//! Headless end-to-end session: tasks and a full countdown driven through
//! the same key events the terminal would deliver.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use termfocus::app::{App, PanelFocus, TimerCommand};
use termfocus_core::{Filter, Priority, SESSION_SECS, TickOutcome};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

#[test]
fn task_management_round_trip() {
    let mut app = App::new();

    // Add two tasks from the input box.
    type_text(&mut app, "Write report");
    app.handle_key_event(key(KeyCode::Enter));
    type_text(&mut app, "Review PR");
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.store.len(), 2);
    assert!(app.input.is_empty());

    // Move to the task list and raise "Write report" to high priority:
    // medium -> low -> high.
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, PanelFocus::Tasks);
    app.handle_key_event(key(KeyCode::Char('p')));
    app.handle_key_event(key(KeyCode::Char('p')));
    assert_eq!(app.store.tasks()[0].priority, Priority::High);

    // Complete it, then look at the completed view.
    app.handle_key_event(key(KeyCode::Char(' ')));
    app.handle_key_event(key(KeyCode::Char('f'))); // active
    app.handle_key_event(key(KeyCode::Char('f'))); // completed
    assert_eq!(app.filter, Filter::Completed);

    let visible = app.visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "Write report");
    assert_eq!(visible[0].priority, Priority::High);
    assert!(visible[0].completed);

    // Delete it; the completed view is empty, the store keeps the other.
    app.handle_key_event(key(KeyCode::Char('d')));
    assert!(app.visible_tasks().is_empty());
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.tasks()[0].text, "Review PR");
}

#[test]
fn full_pomodoro_session() {
    let mut app = App::new();

    // Focus the timer and start it.
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, PanelFocus::Timer);
    assert_eq!(
        app.handle_key_event(key(KeyCode::Char('s'))),
        Some(TimerCommand::StartTicking)
    );

    // A second start request changes nothing.
    assert_eq!(app.handle_key_event(key(KeyCode::Char('s'))), None);

    // Run the session down: exactly one expiry, one notification.
    let mut expirations = 0;
    for _ in 0..SESSION_SECS {
        if app.apply_tick() == TickOutcome::Expired {
            expirations += 1;
        }
    }
    assert_eq!(expirations, 1);
    assert_eq!(app.timer.remaining_secs(), 0);
    assert!(!app.timer.is_running());
    assert!(app.notification.is_some());

    // Stale ticks queued across the stop change nothing.
    assert_eq!(app.apply_tick(), TickOutcome::Idle);

    // The next keypress only dismisses the banner.
    assert_eq!(app.handle_key_event(key(KeyCode::Char('s'))), None);
    assert!(app.notification.is_none());
    assert!(app.timer.is_expired());

    // An expired timer will not start again until reset.
    assert_eq!(app.handle_key_event(key(KeyCode::Char('s'))), None);
    assert!(!app.timer.is_running());

    // Reset restores the full session and stops any ticking.
    assert_eq!(
        app.handle_key_event(key(KeyCode::Char('r'))),
        Some(TimerCommand::StopTicking)
    );
    assert_eq!(app.timer.remaining_secs(), SESSION_SECS);

    // And the session can run again from the top.
    assert_eq!(
        app.handle_key_event(key(KeyCode::Char('s'))),
        Some(TimerCommand::StartTicking)
    );
    assert_eq!(app.apply_tick(), TickOutcome::Ticked);
}

#[test]
fn reset_mid_session_restores_full_length() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('s')));

    for _ in 0..600 {
        app.apply_tick();
    }
    assert_eq!(app.timer.remaining_secs(), SESSION_SECS - 600);

    assert_eq!(
        app.handle_key_event(key(KeyCode::Char('r'))),
        Some(TimerCommand::StopTicking)
    );
    assert_eq!(app.timer.remaining_secs(), SESSION_SECS);
    assert!(!app.timer.is_running());
    assert!(app.notification.is_none());
}

#[test]
fn timer_and_tasks_are_independent() {
    let mut app = App::new();

    type_text(&mut app, "Stay focused");
    app.handle_key_event(key(KeyCode::Enter));

    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('s')));
    for _ in 0..10 {
        app.apply_tick();
    }

    // Task state is untouched by ticking; timer state by task edits.
    assert_eq!(app.store.len(), 1);
    assert!(!app.store.tasks()[0].completed);

    app.handle_key_event(key(KeyCode::Tab)); // wrap to input
    type_text(&mut app, "Another task");
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.timer.remaining_secs(), SESSION_SECS - 10);
    assert!(app.timer.is_running());
}
