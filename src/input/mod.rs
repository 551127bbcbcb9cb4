//! Prompt input: key translation, the input line and command recall

pub mod command_log;
pub mod controller;
pub mod key_translator;
