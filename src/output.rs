//! CLI output formatting for task runs.
//!
//! # Information-First Display
//!
//! Output is **binding-centric, not file-centric**. The primary display for
//! every bound file is the target expression it was assigned to — with the
//! source path shown as secondary context via an indented `Source:` line.
//! This makes the output readable as an inventory of what the artifact now
//! contains while still letting users trace every value back to a file.
//!
//! # Output Format
//!
//! ```text
//! Task strings → dist/app.js
//!     001 app.strings[0].title
//!         Source: 00-title.txt
//!     002 app.strings[1].body
//!         Source: 01-body.txt
//!     2 bound, 1 skipped (4.1 KB appended)
//! ```
//!
//! # Architecture
//!
//! `format_task_report` returns `Vec<String>` for testability; the
//! `print_task_report` wrapper writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::config::TaskConfig;
use crate::generate::TaskRun;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Human-readable byte count: `14 B`, `4.1 KB`, `2.3 MB`.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if (bytes as f64) < MB {
        format!("{:.1} KB", bytes as f64 / KB)
    } else {
        format!("{:.1} MB", bytes as f64 / MB)
    }
}

// ============================================================================
// Task report
// ============================================================================

/// Format one task's run report.
///
/// Information-first: each binding leads with its positional index and the
/// target expression it assigned; the source file is indented context.
pub fn format_task_report(task: &TaskConfig, run: &TaskRun) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Task {} \u{2192} {}",
        task.display_name(),
        task.output_file.display()
    ));
    for (i, file) in run.bound.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), file.target));
        lines.push(format!("        Source: {}", file.source));
    }
    lines.push(format!("    {}", run.stats()));
    lines
}

/// Print a task report to stdout.
pub fn print_task_report(task: &TaskConfig, run: &TaskRun) {
    for line in format_task_report(task, run) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
