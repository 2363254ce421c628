use std::{
    path::PathBuf,
    process::{Command, Stdio},
    sync::Arc,
    thread,
};

use crate::ebc::Error;

pub const DEFAULT_REDRAW_PROGRAM: &str = "/usr/local/bin/refresh_screen";

/// An external action forcing a full screen redraw.
pub trait RedrawAction {
    /// Launches the action without waiting for it to complete.
    fn trigger(&self) -> Result<(), Error>;
}

/// Spawns an external program, without arguments nor input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedrawCommand {
    program: PathBuf,
}

impl RedrawCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        RedrawCommand {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }
}

impl Default for RedrawCommand {
    fn default() -> Self {
        RedrawCommand::new(DEFAULT_REDRAW_PROGRAM)
    }
}

impl RedrawAction for RedrawCommand {
    fn trigger(&self) -> Result<(), Error> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| Error::ActionSpawn {
                program: self.program.clone(),
                source: Arc::new(err),
            })?;

        // Reap the child so it doesn't linger as a zombie, result is informative only.
        let program = self.program.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) => log::debug!("{} exited with {status}", program.display()),
            Err(err) => log::debug!("Failed to wait for {}: {err}", program.display()),
        });

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::{Error, RedrawAction, RedrawCommand};

    #[test]
    fn default_program() {
        assert_eq!(
            RedrawCommand::default().program(),
            std::path::Path::new("/usr/local/bin/refresh_screen"),
        );
    }

    #[test]
    fn spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = RedrawCommand::new(dir.path().join("no_such_program"));

        match cmd.trigger().unwrap_err() {
            Error::ActionSpawn { program, .. } => assert_eq!(program, cmd.program()),
            other => panic!("{other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn spawn() {
        RedrawCommand::new("true").trigger().unwrap();
    }
}
