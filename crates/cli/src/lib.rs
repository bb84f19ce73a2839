//! Terminal front end: parses a command, runs it against freshly seeded
//! stores and renders the result.

pub mod args;
pub mod commands;
pub mod config;
pub mod desk;
pub mod render;

pub use args::{Cli, Command};
pub use config::Settings;
pub use desk::{Collection, Desk};
