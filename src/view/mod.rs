//! View layer
//!
//! Stateless rendering of the portfolio page and the terminal overlay.

pub mod page_view;
pub mod terminal_view;
pub mod theme;
