// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose and usage context.

/// Number of characters of a run identifier shown in note badges and listings.
///
/// Used in: `util/text.rs`
pub const RUN_ID_PREFIX_LEN: usize = 6;

/// Delay in milliseconds after writing the HTML file before the browser opens it.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 200;

/// File name of the note listing inside a payload directory.
///
/// Used in: `infrastructure/json_store.rs`
pub const NOTES_FILE: &str = "notes.json";

/// Directory holding one run-graph payload per root run, named `<root_id>.json`.
///
/// Used in: `infrastructure/json_store.rs`
pub const GRAPHS_DIR: &str = "graphs";

/// Config file name looked up under the platform config directory.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_FILE: &str = "runboard/config.toml";
