//! Task configuration module.
//!
//! Handles loading and validating `filebind.toml` files. A config file
//! declares one or more tasks; each task binds the files of one input
//! directory onto one variable in one base file.
//!
//! ## Config File Shape
//!
//! ```toml
//! [[task]]
//! name = "strings"                 # optional, for display and --task
//! input_dir = "content/strings"    # required, scanned recursively
//! prefix = "str-"                  # filter and strip (default "")
//! extensions = "txt"               # string or array (default: any)
//! base_file = "src/app-base.js"    # required, read and never modified
//! variable = "app.strings"         # required, assignment target
//! output_file = "dist/app.js"      # required, overwritten every run
//! ```
//!
//! ## Polymorphic Options
//!
//! Three options accept more than one TOML shape, mirroring the naming
//! conventions they drive:
//!
//! - `extensions`: a single string or an array of strings.
//! - `use_file_name`: `false` (off), `true` (the walked path becomes the
//!   index key), or a string (that substring is removed from the path
//!   first). The empty string counts as off.
//! - `indexes[].value`: an integer (spliced bare: `[3]`) or a string
//!   (spliced verbatim, quotes included if you wrote them).
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Whole config file: an ordered list of `[[task]]` tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindConfig {
    #[serde(rename = "task")]
    pub tasks: Vec<TaskConfig>,
}

/// One binding task. Required fields have no defaults, so a missing one
/// fails deserialization with a message naming the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    /// Display/selection name. Tasks without one show their `variable`.
    #[serde(default)]
    pub name: Option<String>,
    /// Directory whose files are bound, scanned recursively.
    pub input_dir: PathBuf,
    /// Filename prefix filter. Prefixes longer than one character are also
    /// stripped before name resolution.
    #[serde(default)]
    pub prefix: String,
    /// Filename suffix filter; unrestricted by default.
    #[serde(default)]
    pub extensions: ExtensionFilter,
    /// Enable index mode (requires a non-empty `indexes` table to
    /// actually take effect).
    #[serde(default)]
    pub use_indexes: bool,
    /// Ordered token → slot table for index mode. Order matters: when
    /// several tokens prefix the same filename, the last one wins.
    #[serde(default)]
    pub indexes: Vec<IndexEntry>,
    /// File-path mode: the walked path itself becomes a quoted index key.
    #[serde(default)]
    pub use_file_name: FileNameMode,
    /// Minify contents as JSON-with-comments before embedding.
    #[serde(default)]
    pub minify: bool,
    /// Embed contents as a base64 data URI instead of text.
    #[serde(default)]
    pub base64: bool,
    /// Template source prepended to the generated statements.
    pub base_file: PathBuf,
    /// Variable the statements assign into, e.g. `app.strings`.
    pub variable: String,
    /// Appended verbatim to every target expression, e.g. `.value`.
    #[serde(default)]
    pub variable_suffix: String,
    /// Destination artifact, fully overwritten on success.
    pub output_file: PathBuf,
    /// Disabled tasks are skipped unless selected by name with `--task`.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Extension filter: one suffix or several. `Single("")` and `Many([])`
/// both mean unrestricted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionFilter {
    Single(String),
    Many(Vec<String>),
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        ExtensionFilter::Single(String::new())
    }
}

impl ExtensionFilter {
    /// Configured suffixes, normalized: empty slice means unrestricted.
    pub fn entries(&self) -> &[String] {
        match self {
            ExtensionFilter::Single(ext) if ext.is_empty() => &[],
            ExtensionFilter::Single(ext) => std::slice::from_ref(ext),
            ExtensionFilter::Many(exts) => exts,
        }
    }
}

/// One row of the index table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexEntry {
    /// Filename prefix (after the task prefix is stripped) that selects
    /// this slot.
    pub token: String,
    /// What lands between the brackets.
    pub value: IndexValue,
}

/// Bracket index value: an integer slot or a verbatim string expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexValue {
    Number(i64),
    Key(String),
}

impl fmt::Display for IndexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexValue::Number(n) => write!(f, "{n}"),
            IndexValue::Key(k) => f.write_str(k),
        }
    }
}

/// The `use_file_name` option: off, on, or on-with-substring-strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileNameMode {
    Toggle(bool),
    Strip(String),
}

impl Default for FileNameMode {
    fn default() -> Self {
        FileNameMode::Toggle(false)
    }
}

impl FileNameMode {
    /// Whether file-path mode applies. `Strip("")` is off: the empty
    /// string disables the mode just like `false`.
    pub fn is_active(&self) -> bool {
        match self {
            FileNameMode::Toggle(enabled) => *enabled,
            FileNameMode::Strip(sub) => !sub.is_empty(),
        }
    }

    /// The substring to remove from the walked path, when one is set.
    pub fn strip_pattern(&self) -> Option<&str> {
        match self {
            FileNameMode::Strip(sub) if !sub.is_empty() => Some(sub),
            _ => None,
        }
    }
}

impl TaskConfig {
    /// Name shown in reports and matched by `--task`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.variable)
    }

    /// Check the task against the filesystem. Runs before any processing;
    /// a task that fails here produces no output at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let label = self.display_name();
        if !self.input_dir.is_dir() {
            return Err(ConfigError::Validation(format!(
                "task '{label}': input_dir '{}' is not a directory",
                self.input_dir.display()
            )));
        }
        if !self.base_file.is_file() {
            return Err(ConfigError::Validation(format!(
                "task '{label}': base_file '{}' does not exist",
                self.base_file.display()
            )));
        }
        if self.variable.is_empty() {
            return Err(ConfigError::Validation(format!(
                "task '{label}': variable must not be empty"
            )));
        }
        Ok(())
    }
}

impl BindConfig {
    /// Shape checks that need no filesystem: at least one task, and task
    /// names unique so `--task` selection is unambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tasks.is_empty() {
            return Err(ConfigError::Validation(
                "config defines no tasks".into(),
            ));
        }
        let mut seen: Vec<&str> = Vec::new();
        for task in &self.tasks {
            if let Some(name) = task.name.as_deref() {
                if seen.contains(&name) {
                    return Err(ConfigError::Validation(format!(
                        "duplicate task name '{name}'"
                    )));
                }
                seen.push(name);
            }
        }
        Ok(())
    }

    /// Tasks to run for this invocation, in config order.
    ///
    /// With no `--task` names, every enabled task runs. Naming a task runs
    /// it even when disabled (`enabled = false` means "not by default").
    /// Naming a task the config does not define is an error.
    pub fn select(&self, names: &[String]) -> Result<Vec<&TaskConfig>, ConfigError> {
        if names.is_empty() {
            return Ok(self.tasks.iter().filter(|t| t.enabled).collect());
        }
        for name in names {
            if !self.tasks.iter().any(|t| t.name.as_deref() == Some(name)) {
                return Err(ConfigError::Validation(format!(
                    "no task named '{name}' in config"
                )));
            }
        }
        Ok(self
            .tasks
            .iter()
            .filter(|t| {
                t.name
                    .as_deref()
                    .is_some_and(|n| names.iter().any(|m| m == n))
            })
            .collect())
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load and shape-check a config file.
///
/// Filesystem checks (input directories, base files) run later, per task,
/// so a config can be edited on a machine where the content tree does not
/// exist yet.
pub fn load_config(path: &Path) -> Result<BindConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Validation(format!(
            "config file '{}' not found (try 'filebind gen-config > {}')",
            path.display(),
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    let config: BindConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented starter `filebind.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# filebind configuration
# ======================
# Each [[task]] binds the files of one directory onto one variable in one
# base file. Tasks run in the order they appear here.
#
# Required per task: input_dir, base_file, variable, output_file.
# Everything else is optional; defaults are shown below.
# Unknown keys will cause an error.

[[task]]
# Display name, also matched by `filebind --task <name>`. Optional.
name = "strings"

# Directory whose files are bound. Scanned recursively.
input_dir = "content/strings"

# Only filenames starting with this prefix participate. A prefix longer
# than one character is also stripped before the property name is read.
prefix = ""

# Only filenames ending with one of these suffixes participate.
# A single string or an array: extensions = ["txt", "json"]
# "" means no restriction. Files matched by "json" embed unquoted.
extensions = "txt"

# ---------------------------------------------------------------------------
# Name resolution
# ---------------------------------------------------------------------------
# Index mode: filenames starting with a token land in that slot of the
# variable. The token and the separator character after it are consumed,
# so "01-title.txt" with token "01" assigns to <variable>[1].title.
# When several tokens match one filename, the LAST matching row wins.
# A file matched by no token aborts the run.
use_indexes = false
indexes = [
  # { token = "00", value = 0 },
  # { token = "01", value = 1 },
]

# File-path mode (only when index mode is off): the walked path becomes a
# quoted index key. `true` uses the path as-is; a string removes that
# substring first, e.g. "content/" turns "content/img/a.png" into
# <variable>['img/a.png'].
use_file_name = false

# ---------------------------------------------------------------------------
# Content encoding
# ---------------------------------------------------------------------------
# Minify contents as JSON-with-comments (// and /* */ allowed) before
# embedding. Malformed content aborts the run.
minify = false

# Embed contents as 'data:<mime>;base64,...' instead of text. Useful for
# images and other binary payloads.
base64 = false

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
# Template prepended to the generated statements; never modified.
base_file = "src/app-base.js"

# Variable the statements assign into.
variable = "app.strings"

# Appended verbatim to every target, e.g. ".value" to assign
# app.strings[1].title.value instead of app.strings[1].title.
variable_suffix = ""

# Destination artifact. Fully overwritten on every successful run, and
# left untouched when the run fails.
output_file = "dist/app.js"

# Disabled tasks are skipped unless named with --task.
enabled = true

# A second task appends to the same artifact chain by using the previous
# output as its base:
#
# [[task]]
# name = "images"
# input_dir = "content/images"
# base_file = "dist/app.js"
# variable = "app.images"
# output_file = "dist/app.js"
# use_file_name = "content/"
# base64 = true
"##
}
