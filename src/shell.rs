use crate::error::LaunchError;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Something that can run a command string and wait for it.
pub trait CommandProcessor {
    /// Whether commands can be run at all on this host.
    fn is_available(&self) -> bool;

    /// Run `command_line` with inherited standard streams and block until it
    /// exits, returning its exit code.
    fn run(&self, command_line: &str) -> Result<i32, LaunchError>;
}

/// The host's command interpreter (`/bin/sh -c` or `cmd.exe /C`).
#[derive(Debug, Clone)]
pub struct SystemShell {
    interpreter: PathBuf,
    flag: &'static str,
}

#[cfg(not(windows))]
const DEFAULT_INTERPRETER: &str = "/bin/sh";
#[cfg(not(windows))]
const DEFAULT_FLAG: &str = "-c";

#[cfg(windows)]
const DEFAULT_FLAG: &str = "/C";

impl SystemShell {
    #[cfg(not(windows))]
    pub fn detect() -> Self {
        Self::with_interpreter(DEFAULT_INTERPRETER, DEFAULT_FLAG)
    }

    /// `%COMSPEC%` when set, else `cmd.exe` from the search path.
    #[cfg(windows)]
    pub fn detect() -> Self {
        let interpreter = std::env::var_os("COMSPEC")
            .map(PathBuf::from)
            .filter(|p| p.is_file())
            .or_else(|| which::which("cmd.exe").ok())
            .unwrap_or_else(|| PathBuf::from("cmd.exe"));
        Self::with_interpreter(interpreter, DEFAULT_FLAG)
    }

    pub fn with_interpreter(interpreter: impl Into<PathBuf>, flag: &'static str) -> Self {
        Self {
            interpreter: interpreter.into(),
            flag,
        }
    }

    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    #[cfg(not(windows))]
    fn command(&self, command_line: &str) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(self.flag).arg(command_line);
        cmd
    }

    // cmd.exe does its own parsing, so the line goes through unquoted.
    #[cfg(windows)]
    fn command(&self, command_line: &str) -> Command {
        use std::os::windows::process::CommandExt;
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(self.flag).raw_arg(command_line);
        cmd
    }
}

impl CommandProcessor for SystemShell {
    fn is_available(&self) -> bool {
        self.interpreter.is_file()
    }

    fn run(&self, command_line: &str) -> Result<i32, LaunchError> {
        tracing::debug!(
            interpreter = %self.interpreter.display(),
            flag = self.flag,
            command = command_line,
            "spawning command processor"
        );
        let status = self
            .command(command_line)
            .status()
            .map_err(|source| LaunchError::Spawn {
                interpreter: self.interpreter.clone(),
                source,
            })?;
        Ok(exit_code(status))
    }
}

/// Exit code of a finished child. A POSIX child killed by signal N reports
/// `128 + N`, the way shells do.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    tracing::warn!(?status, "child exited without a code");
    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detect_uses_bin_sh() {
        assert_eq!(SystemShell::detect().interpreter(), Path::new("/bin/sh"));
    }

    #[test]
    fn default_shell_is_available() {
        assert!(SystemShell::detect().is_available());
    }

    #[test]
    fn missing_interpreter_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let shell = SystemShell::with_interpreter(dir.path().join("no-such-sh"), "-c");
        assert!(!shell.is_available());
    }

    #[test]
    fn directory_is_not_an_interpreter() {
        let dir = tempfile::tempdir().unwrap();
        let shell = SystemShell::with_interpreter(dir.path(), "-c");
        assert!(!shell.is_available());
    }

    #[test]
    fn run_returns_child_exit_code() {
        let shell = SystemShell::detect();
        assert_eq!(shell.run("exit 0").unwrap(), 0);
        assert_eq!(shell.run("exit 42").unwrap(), 42);
    }

    #[test]
    fn unknown_command_reports_shell_not_found_code() {
        let shell = SystemShell::detect();
        let code = shell
            .run("definitely-not-a-real-command-5f3a2 >/dev/null 2>&1")
            .unwrap();
        assert_eq!(code, 127);
    }

    #[test]
    fn signalled_child_maps_to_128_plus_signal() {
        let shell = SystemShell::detect();
        // SIGTERM is 15
        assert_eq!(shell.run("kill -TERM $$").unwrap(), 143);
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let shell = SystemShell::with_interpreter(dir.path().join("no-such-sh"), "-c");
        let err = shell.run("exit 0").unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
