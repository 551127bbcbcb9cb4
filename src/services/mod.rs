//! Process-level services: clocks, logging and terminal setup
//!
//! Nothing in here knows about the terminal simulator's state.

pub mod log_dirs;
pub mod terminal_modes;
pub mod time_source;
pub mod tracing_setup;
