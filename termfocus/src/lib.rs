//! `TermFocus` — terminal-native focus dashboard library.

pub mod app;
pub mod config;
pub mod tick;
pub mod ui;
