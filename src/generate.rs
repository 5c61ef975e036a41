//! Per-task generation driver.
//!
//! Runs the whole pipeline for one task: validate, read the base file,
//! walk the input directory, and push every accepted file through
//! filter → naming → encode → emit. Statements accumulate in walk order;
//! the final artifact is the base contents with all of them appended.
//!
//! ## Failure model
//!
//! Filter rejections are the only non-fatal outcome: the file is counted
//! and skipped. Everything else (unmatched index token, malformed JSON,
//! unreadable file) aborts the task immediately. Computing and writing are
//! split: `run_task` touches nothing on disk, and `write_output` performs
//! the single destination write afterwards, so a failed run never leaves
//! a partial artifact behind.

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;
use walkdir::WalkDir;

use crate::config::{ConfigError, TaskConfig};
use crate::encode::{self, EncodeError};
use crate::naming::{self, NamingError};
use crate::output::format_size;
use crate::{emit, filter};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Naming error: {0}")]
    Naming(#[from] NamingError),
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// One accepted file and the assignment it produced.
#[derive(Debug, Clone)]
pub struct BoundFile {
    /// Source path relative to the task's input directory.
    pub source: String,
    /// Left-hand target expression, e.g. `app.strings[1].title`.
    pub target: String,
    /// Source size in bytes, for the report.
    pub bytes: usize,
}

/// Everything one task computed. Nothing here has touched the disk yet.
#[derive(Debug)]
pub struct TaskRun {
    pub bound: Vec<BoundFile>,
    pub skipped: usize,
    pub statements: Vec<String>,
    /// Base file contents plus all statements, in encounter order.
    pub final_output: String,
}

impl TaskRun {
    pub fn stats(&self) -> RunStats {
        RunStats {
            bound: self.bound.len(),
            skipped: self.skipped,
            appended: self.statements.iter().map(String::len).sum(),
        }
    }
}

/// Summary counters for one task run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    pub bound: usize,
    pub skipped: usize,
    /// Bytes of generated statements appended after the base contents.
    pub appended: usize,
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.skipped > 0 {
            write!(
                f,
                "{} bound, {} skipped ({} appended)",
                self.bound,
                self.skipped,
                format_size(self.appended)
            )
        } else {
            write!(
                f,
                "{} bound ({} appended)",
                self.bound,
                format_size(self.appended)
            )
        }
    }
}

/// Compute one task end to end without writing anything.
///
/// Walks the input directory recursively, per-directory entries sorted by
/// file name, so two runs over the same tree always visit files in the
/// same order and produce byte-identical output.
pub fn run_task(task: &TaskConfig) -> Result<TaskRun, GenerateError> {
    task.validate()?;
    let base = fs::read_to_string(&task.base_file)?;

    let mut bound = Vec::new();
    let mut statements = Vec::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(&task.input_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        if !filter::matches(&filename, &task.prefix, &task.extensions) {
            skipped += 1;
            continue;
        }

        // The resolver sees the path exactly as the walk assembled it
        // (configured root plus relative remainder).
        let walked_path = entry.path().to_string_lossy().into_owned();
        let resolved = naming::resolve(&filename, &walked_path, task)?;

        let contents = fs::read(entry.path())?;
        let as_json = filter::matched_extension(&filename, &task.extensions) == Some("json");
        let value = encode::encode(entry.path(), &contents, task, as_json)?;

        let target = emit::target_expr(&task.variable, &resolved, &task.variable_suffix);
        statements.push(emit::statement(&target, &value));
        bound.push(BoundFile {
            source: relative_to(entry.path(), &task.input_dir),
            target,
            bytes: contents.len(),
        });
    }

    let mut final_output = base;
    for statement in &statements {
        final_output.push_str(statement);
    }

    Ok(TaskRun {
        bound,
        skipped,
        statements,
        final_output,
    })
}

/// The single destination write of a run: the whole artifact at once,
/// after everything has been computed.
pub fn write_output(task: &TaskConfig, run: &TaskRun) -> Result<(), GenerateError> {
    fs::write(&task.output_file, &run.final_output)?;
    Ok(())
}

fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
