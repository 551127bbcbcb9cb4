//! Application layer: the terminal simulator and the page that hosts it

pub mod boot;
pub mod commands;
pub mod portfolio;
pub mod scheduler;
pub mod section_router;
pub mod terminal;
