use crate::command::Target;
use crate::config;
use crate::console::{ConsoleControl, HostConsole};
use crate::error::LaunchError;
use crate::logging;
use crate::shell::{CommandProcessor, SystemShell};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

pub struct Launcher<P, C> {
    target: Target,
    processor: P,
    console: C,
    hide_console: bool,
}

impl Launcher<SystemShell, HostConsole> {
    /// Launcher for `target` using the host shell and console. The console is
    /// hidden only on Windows.
    pub fn for_host(target: Target) -> Self {
        Launcher::new(target, SystemShell::detect(), HostConsole).hide_console(cfg!(windows))
    }
}

impl<P: CommandProcessor, C: ConsoleControl> Launcher<P, C> {
    pub fn new(target: Target, processor: P, console: C) -> Self {
        Self {
            target,
            processor,
            console,
            hide_console: false,
        }
    }

    pub fn hide_console(mut self, hide: bool) -> Self {
        self.hide_console = hide;
        self
    }

    /// Hide the console, check for a shell, run the target's command and
    /// return its exit code. The console stays hidden afterwards, even when
    /// no shell is found.
    pub fn run(&self) -> Result<i32, LaunchError> {
        if self.hide_console {
            self.console.hide();
        }

        if !self.processor.is_available() {
            warn!(app = self.target.name(), "no command processor available");
            return Err(LaunchError::ShellUnavailable);
        }

        let command = self.target.command().command_line();
        info!(app = self.target.name(), %command, "launching");
        let code = self.processor.run(&command)?;
        info!(app = self.target.name(), code, "child exited");
        Ok(code)
    }
}

/// Entry point shared by the launcher binaries. Arguments are ignored.
///
/// Logging is torn down before returning so the caller can hand the code
/// straight to [`std::process::exit`].
pub fn main(target: Target) -> i32 {
    let _guard = init_logging();

    match Launcher::for_host(target).run() {
        Ok(code) => code,
        Err(e) => {
            error!(app = target.name(), "{e}");
            e.exit_code()
        }
    }
}

/// Without a log directory or a subscriber there is nowhere to report
/// problems, so those cases run unlogged.
fn init_logging() -> Option<WorkerGuard> {
    let (settings, paths, problem) = config::load_or_default().ok()?;
    let guard = logging::init(&settings, &paths).ok().flatten()?;
    if let Some(e) = problem {
        warn!("{e:#}, using defaults");
    }
    Some(guard)
}
