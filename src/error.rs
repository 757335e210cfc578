use std::path::PathBuf;
use thiserror::Error;

/// Status returned when no command processor is available.
pub const UNAVAILABLE_EXIT_CODE: i32 = 1;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("no command processor is available on this host")]
    ShellUnavailable,

    #[error("failed to spawn command processor {}: {source}", .interpreter.display())]
    Spawn {
        interpreter: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Exit status the launcher reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // A shell that exists but cannot be started counts as a missing one.
            LaunchError::ShellUnavailable | LaunchError::Spawn { .. } => UNAVAILABLE_EXIT_CODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn environment_errors_exit_with_one() {
        assert_eq!(LaunchError::ShellUnavailable.exit_code(), 1);
        let spawn = LaunchError::Spawn {
            interpreter: PathBuf::from("/bin/sh"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(spawn.exit_code(), 1);
    }

    #[test]
    fn spawn_error_names_interpreter() {
        let spawn = LaunchError::Spawn {
            interpreter: PathBuf::from("/bin/sh"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(spawn.to_string().contains("/bin/sh"));
    }
}
