//! Native launchers for the SCU openBIS Importer Java applications.
//!
//! Each binary checks for a command processor, hides its console window on
//! Windows, runs a fixed `java -jar ./lib/<app>.jar` line and exits with the
//! child's status.

pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod shell;

pub use command::{LaunchCommand, Target};
pub use error::LaunchError;
pub use launcher::Launcher;
