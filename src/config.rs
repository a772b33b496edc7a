//! Compile-time Configuration

/// Key of the persisted task list in browser storage
pub const STORAGE_KEY: &str = "zos-todos";

/// Title shown in the title bar and the shell launcher
pub const APP_TITLE: &str = "Reminders";

pub const INPUT_PLACEHOLDER: &str = "Add a reminder...";
