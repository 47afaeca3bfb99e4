//! Task record and the enums that describe it.
//!
//! A [`Task`] is a single to-do item: display text, a completion flag, and a
//! [`Priority`]. [`Filter`] is the view-only predicate used to derive the
//! visible subset of a task list; it never affects stored state.

use uuid::Uuid;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
///
/// Uniqueness within a store is the only invariant callers may rely on;
/// the ordering encoded in v7 timestamps is incidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Importance of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    /// Do this first.
    High,
    /// Default for newly created tasks.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Next priority in the selector order High → Medium → Low → High.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// View-only predicate selecting which tasks are displayed.
///
/// Ephemeral UI state: changing the filter never mutates the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
}

impl Filter {
    /// Whether `task` is visible under this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Next filter in the cycle All → Active → Completed → All.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier (UUID v7, time-ordered).
    pub id: TaskId,
    /// Display text, exactly as entered.
    pub text: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Importance; defaults to [`Priority::Medium`].
    pub priority: Priority,
}

impl Task {
    /// Creates an open, medium-priority task with a fresh id.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            completed: false,
            priority: Priority::default(),
        }
    }
}
