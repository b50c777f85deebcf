//! invocation
//!
//! Construction of the generator's argument list.
//!
//! The generator reads only from the directory passed via `--patches` and
//! writes only to paths it is explicitly given. Omitting an output option
//! suppresses the corresponding write entirely, which is what makes dry-run
//! side-effect free from the driver's point of view.
//!
//! All paths are fixed and repository-relative; the driver is expected to run
//! from the repository root.

use crate::mode::Mode;

/// Entry point of the external generation tool, resolved through `PATH`.
pub const GENERATOR_PROGRAM: &str = "generate_reflection";

/// Directory of patch definitions the generator reads from.
pub const PATCHES_DIR: &str = "patches";

/// Compact serialized reflection database.
pub const DATABASE_MSGPACK_PATH: &str = "rbx_reflection_database/database.msgpack";

/// Human-readable full dump of the reflection database.
pub const DATABASE_JSON_PATH: &str = "rbx_dom_lua/src/database.json";

/// Flattened enumeration of all distinct values referenced by the database.
pub const ALL_VALUES_PATH: &str = "rbx_dom_lua/src/allValues.json";

/// A fully composed generator invocation.
///
/// The argument list is fixed per mode: dry-run carries only `--patches`,
/// full additionally carries all three output destinations. No other
/// combination is constructible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    /// Build the argument list for the given mode.
    pub fn for_mode(mode: Mode) -> Self {
        let mut args = vec!["--patches".to_owned(), PATCHES_DIR.to_owned()];

        if mode == Mode::Full {
            args.extend(
                [
                    "--msgpack",
                    DATABASE_MSGPACK_PATH,
                    "--json",
                    DATABASE_JSON_PATH,
                    "--values",
                    ALL_VALUES_PATH,
                ]
                .map(str::to_owned),
            );
        }

        Self { args }
    }

    /// The ordered argument list, exactly as handed to the generator.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether the list contains the given option flag.
    pub fn has_option(&self, flag: &str) -> bool {
        self.args.iter().any(|arg| arg == flag)
    }
}
