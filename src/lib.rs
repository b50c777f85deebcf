//! reflection-refresh - build-step driver for the reflection database.
//!
//! The reflection database artifacts checked into the repository are derived
//! from the patch files under `patches/`. Regenerating them is the job of an
//! external tool, `generate_reflection`; this crate is the thin driver that
//! decides *how* that tool gets invoked and hands its verdict back to the
//! build system unchanged.
//!
//! # Architecture
//!
//! Two components, composed linearly:
//!
//! - [`mode`] - decides between dry-run and full generation from the first
//!   process argument
//! - [`invocation`] and [`runner`] - build the generator's argument list for
//!   the selected mode and execute it synchronously
//!
//! # Correctness Invariants
//!
//! 1. A dry-run invocation carries no output destinations, so the generator
//!    persists nothing
//! 2. A full invocation always carries all three output destinations
//! 3. The generator's exit code reaches the caller unchanged

pub mod invocation;
pub mod mode;
pub mod runner;

pub use invocation::Invocation;
pub use mode::Mode;
pub use runner::{Generator, ProcessGenerator};

use anyhow::{Context, Result};

/// Run the driver pipeline and report the exit code to hand to the OS.
///
/// This is the main entry point called from `main.rs`. `args` is the process
/// argument list *without* the program name.
///
/// The returned code is the generator's own exit code; `Err` means the
/// generator could not be launched at all.
pub fn run<I, S>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mode = Mode::select(args);
    let generator = ProcessGenerator::default();

    let status = runner::compose_and_run(mode, &generator)
        .context("failed to regenerate the reflection database")?;

    Ok(runner::exit_code(status))
}
