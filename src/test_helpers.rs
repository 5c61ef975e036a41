//! Shared test utilities for the filebind test suite.
//!
//! Builders for temp-directory task fixtures plus small constructors for
//! config values that are awkward to write inline.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (dir, task) = task_fixture("var app = {};\n");
//! write_file(&dir.path().join("content"), "title.txt", "Morning");
//! let run = crate::generate::run_task(&task).unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::{ExtensionFilter, FileNameMode, IndexEntry, IndexValue, TaskConfig};

/// A task with every optional field at its default and dummy relative
/// paths. For pure resolution/encoding tests that never touch the
/// filesystem.
pub fn plain_task() -> TaskConfig {
    TaskConfig {
        name: None,
        input_dir: PathBuf::from("content"),
        prefix: String::new(),
        extensions: ExtensionFilter::default(),
        use_indexes: false,
        indexes: Vec::new(),
        use_file_name: FileNameMode::default(),
        minify: false,
        base64: false,
        base_file: PathBuf::from("base.js"),
        variable: "app".to_string(),
        variable_suffix: String::new(),
        output_file: PathBuf::from("out.js"),
        enabled: true,
    }
}

/// A runnable fixture: temp dir holding `content/` (empty), `base.js`
/// with the given contents, and a task pointing at them. The output lands
/// in the same temp dir as `out.js`.
pub fn task_fixture(base_contents: &str) -> (TempDir, TaskConfig) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("content");
    fs::create_dir(&input).unwrap();
    let base = dir.path().join("base.js");
    fs::write(&base, base_contents).unwrap();

    let mut task = plain_task();
    task.input_dir = input;
    task.base_file = base;
    task.output_file = dir.path().join("out.js");
    (dir, task)
}

/// Write one file into `dir` (which must exist).
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Index table from `(token, slot)` pairs, in order.
pub fn indexes(entries: &[(&str, i64)]) -> Vec<IndexEntry> {
    entries
        .iter()
        .map(|(token, value)| IndexEntry {
            token: token.to_string(),
            value: IndexValue::Number(*value),
        })
        .collect()
}
