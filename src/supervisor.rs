//! Child process supervision for the spinner widget.
//!
//! The supervised command runs concurrently with the animation; the
//! event loop observes it through non-blocking polls, so a slow child
//! never stalls a render. Termination kills and reaps in one step —
//! a cancelled spinner must not leave an orphan behind.

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};

use tracing::debug;

use crate::error::Error;

/// Handle over one running child process.
#[derive(Debug)]
pub struct Supervisor {
    command: String,
    child: Child,
}

impl Supervisor {
    /// Launch `argv[0]` with the remaining arguments.
    ///
    /// The child's stdout is nulled while the spinner owns the screen;
    /// its stderr stays attached so a failing command can still say
    /// why it failed.
    pub fn spawn(argv: &[String]) -> Result<Self, Error> {
        let (program, args) = argv.split_first().ok_or(Error::EmptyCommand)?;
        let child = Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .spawn()
            .map_err(|source| Error::Spawn {
                command: program.clone(),
                source,
            })?;
        debug!(command = %program, pid = child.id(), "child started");
        Ok(Supervisor {
            command: program.clone(),
            child,
        })
    }

    /// Non-blocking completion check. `Some(code)` once the child has
    /// exited; repeated calls after completion keep returning it.
    pub fn poll(&mut self) -> io::Result<Option<i32>> {
        Ok(self.child.try_wait()?.map(exit_code))
    }

    /// Kill the child and reap it. Called on every outcome that is not
    /// the child's own exit.
    pub fn terminate(&mut self) -> io::Result<()> {
        self.child.kill()?;
        let status = self.child.wait()?;
        debug!(command = %self.command, code = exit_code(status), "child terminated");
        Ok(())
    }
}

/// Map an exit status to the code the invocation should report.
/// Signal deaths follow the shell convention of 128 + signal number.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(1)
}
