//! `TermFocus` — task store and countdown timer library.
//!
//! UI-agnostic building blocks for the focus dashboard: an in-memory
//! [`TaskStore`] with filtering, and a one-shot [`CountdownTimer`] with a
//! single completion signal. Rendering is left to the caller.

pub mod store;
pub mod task;
pub mod timer;

pub use store::{TaskError, TaskStore};
pub use task::{Filter, Priority, Task, TaskId};
pub use timer::{CountdownTimer, SESSION_SECS, TickOutcome, format_mm_ss};
