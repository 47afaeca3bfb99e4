//! In-memory task store with filtering.
//!
//! [`TaskStore`] owns an ordered sequence of tasks and exposes the CRUD
//! surface of the dashboard: add, toggle, remove, re-prioritize, and a
//! derived filtered view. Everything lives in process memory; nothing is
//! persisted.

use thiserror::Error;

use crate::task::{Filter, Priority, Task, TaskId};

/// Errors that can occur during task operations.
///
/// Callers that mirror the dashboard's reference behaviour treat every
/// variant as a silent no-op: no error path mutates the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task text was empty or whitespace-only.
    #[error("task text cannot be empty")]
    TextEmpty,
    /// Task with the given ID was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Ordered, in-memory collection of tasks.
///
/// Insertion order is display order and survives every mutation except
/// removal of the task itself.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends a new task with the given text.
    ///
    /// The text is stored exactly as given; only the emptiness check is
    /// applied to the trimmed form. The new task starts open with
    /// [`Priority::Medium`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TextEmpty`] if the trimmed text is empty. The
    /// store is unchanged on error.
    pub fn add(&mut self, text: &str) -> Result<Task, TaskError> {
        if text.trim().is_empty() {
            return Err(TaskError::TextEmpty);
        }
        let task = Task::new(text);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Flips the completion flag of the matching task.
    ///
    /// Returns the new value of the flag. Toggling twice restores the
    /// original value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] if no task has this id; all
    /// tasks are left unchanged.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Removes and returns the matching task.
    ///
    /// The remaining tasks keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] if no task has this id.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Sets the priority of the matching task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] if no task has this id.
    pub fn set_priority(&mut self, id: TaskId, priority: Priority) -> Result<(), TaskError> {
        self.get_mut(id)?.priority = priority;
        Ok(())
    }

    /// Returns the ordered subsequence of tasks visible under `filter`.
    ///
    /// Pure view over current state; recomputed on every call.
    #[must_use]
    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Returns the task with this id, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks, ignoring the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::TaskNotFound(id))
    }
}
