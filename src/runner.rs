//! runner
//!
//! Synchronous execution of a generator invocation.
//!
//! The [`Generator`] trait is the single doorway between the driver and the
//! external tool: production code goes through [`ProcessGenerator`], tests
//! substitute a recording mock. The driver performs no local recovery - any
//! generator failure propagates as-is to the caller's exit status, and output
//! files written before a failure are left alone.

use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::invocation::{Invocation, GENERATOR_PROGRAM};
use crate::mode::Mode;

/// Errors from launching the generator.
///
/// This is the only fault the driver recognizes as its own; everything the
/// generator reports after launching is carried verbatim in its exit status.
#[derive(Debug, Error)]
pub enum RunError {
    /// The generator executable could not be started.
    #[error("failed to launch generator `{program}`: {source}")]
    Launch {
        /// The program that was being launched
        program: String,
        /// The underlying OS error
        source: io::Error,
    },
}

/// Executes a composed invocation and reports how the generator exited.
pub trait Generator {
    /// Run the generator synchronously, blocking until it exits.
    fn run(&self, invocation: &Invocation) -> Result<ExitStatus, RunError>;
}

/// The real generator: spawns the external tool as a child process.
pub struct ProcessGenerator {
    program: PathBuf,
}

impl ProcessGenerator {
    /// Create a generator that spawns the given program.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ProcessGenerator {
    fn default() -> Self {
        Self::new(GENERATOR_PROGRAM)
    }
}

impl Generator for ProcessGenerator {
    fn run(&self, invocation: &Invocation) -> Result<ExitStatus, RunError> {
        Command::new(&self.program)
            .args(invocation.args())
            .status()
            .map_err(|source| RunError::Launch {
                program: self.program.display().to_string(),
                source,
            })
    }
}

/// Compose the invocation for `mode` and execute it.
///
/// Straight-line, two-branch execution: no retries, no loops, no intermediate
/// states. Full mode overwrites the three artifacts at their fixed paths;
/// dry-run passes no destinations so nothing is written.
pub fn compose_and_run(mode: Mode, generator: &dyn Generator) -> Result<ExitStatus, RunError> {
    generator.run(&Invocation::for_mode(mode))
}

/// The process exit code to report for a finished generator.
///
/// The generator's code passes through unchanged. A signal-terminated
/// generator has no code; that still counts as failure.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
