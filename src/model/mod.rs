//! Core data model: transcript, session state, portfolio sections

pub mod history;
pub mod section;
pub mod session;
