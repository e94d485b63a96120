//! Parleyctl library - exposes modules for testing

pub mod cli;
pub mod display;
pub mod logging;
pub mod repl;
