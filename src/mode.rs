//! mode
//!
//! Mode selection for the driver.
//!
//! The driver has exactly two modes, resolved once at startup from the first
//! process argument. Selection is total: every argument list maps to a mode,
//! and nothing here touches the filesystem or the environment.

/// How the generator should be invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Exercise generation without persisting any artifacts.
    ///
    /// The generator is given no output destinations, so a successful run
    /// proves the patches are consistent without mutating build outputs.
    DryRun,

    /// Regenerate all three artifacts at their fixed paths.
    Full,
}

impl Mode {
    /// Resolve the mode from the process arguments (program name excluded).
    ///
    /// Only the first argument is inspected: `--dry-run` selects
    /// [`Mode::DryRun`], anything else - including an empty argument list -
    /// falls through to [`Mode::Full`]. Unrecognized arguments are not an
    /// error; callers must not rely on them causing failure.
    ///
    /// # Example
    ///
    /// ```
    /// use reflection_refresh::Mode;
    ///
    /// assert_eq!(Mode::select(["--dry-run"]), Mode::DryRun);
    /// assert_eq!(Mode::select(Vec::<String>::new()), Mode::Full);
    /// ```
    pub fn select<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match args.into_iter().next() {
            Some(first) if first.as_ref() == "--dry-run" => Self::DryRun,
            _ => Self::Full,
        }
    }
}
