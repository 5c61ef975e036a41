//! Filename decoding: where does a file's content land on the variable?
//!
//! Every accepted file resolves to at most two coordinates: an optional
//! bracket index and a property name. Three modes produce them, tried in
//! strict precedence order:
//!
//! 1. **Index mode**: `use_indexes` with a non-empty `indexes` table. The
//!    filename (prefix removed) is scanned against the table's tokens in
//!    config order and the content lands in the matching token's slot.
//! 2. **File-path mode**: `use_file_name` active. The walked path itself,
//!    minus an optional substring, becomes a quoted string index.
//! 3. **Plain mode**: the filename stem becomes the property name.
//!
//! ## Worked examples
//!
//! With indexes `[{token = "00", value = 0}, {token = "01", value = 1}]`:
//! - `01-title.txt` → index `1`, property `title`
//! - `02-title.txt` → no token matches, fatal
//!
//! With `use_file_name = "../public_html/"`:
//! - `../public_html/img/photo.jpg` → index `'img/photo.jpg'`, no property
//!
//! Plain mode:
//! - `headline.txt` → property `headline`
//! - `style.min.css` → property `style.min` (only the final `.` truncates)

use thiserror::Error;

use crate::config::TaskConfig;

#[derive(Error, Debug)]
pub enum NamingError {
    /// Index mode is active but no configured token prefixes the filename,
    /// so the file cannot be assigned a slot. Fatal: aborts the whole run.
    #[error("no index token matches '{filename}' (configured tokens: {tokens:?})")]
    AmbiguousIndex { filename: String, tokens: Vec<String> },
}

/// Coordinates of one file's assignment target, ready for splicing.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedName {
    /// Bracket expression, spliced verbatim between `[` and `]`. Numeric
    /// index values render bare; file-path mode supplies its own quotes.
    pub index: Option<String>,
    /// Dotted property name. Empty means the content binds to the variable
    /// (or the indexed slot) itself, with no `.property` segment.
    pub property: String,
}

/// Derive the assignment coordinates for an accepted filename.
///
/// `walked_path` is the path exactly as the directory walk produced it
/// (configured root joined with the relative remainder); file-path mode
/// strips substrings from it literally, with no path normalization.
pub fn resolve(
    filename: &str,
    walked_path: &str,
    task: &TaskConfig,
) -> Result<ResolvedName, NamingError> {
    // Single-character prefixes filter but are never stripped, so they do
    // not eat into the property name.
    let remainder = if task.prefix.len() > 1 {
        filename.strip_prefix(task.prefix.as_str()).unwrap_or(filename)
    } else {
        filename
    };

    if task.use_indexes && !task.indexes.is_empty() {
        // Scan the whole table; a later matching token overwrites an
        // earlier one. Last match wins, and callers order overlapping
        // tokens accordingly.
        let mut matched: Option<(String, &str)> = None;
        for entry in &task.indexes {
            if remainder.starts_with(entry.token.as_str()) {
                // The token and the one character after it (conventionally
                // the `-` separator) are consumed before the property name
                // is read: `01-title.txt` with token `01` reads `title`.
                let rest = remainder.get(entry.token.len() + 1..).unwrap_or("");
                matched = Some((entry.value.to_string(), rest));
            }
        }
        return match matched {
            Some((index, rest)) => Ok(ResolvedName {
                index: Some(index),
                property: stem(rest).to_string(),
            }),
            None => Err(NamingError::AmbiguousIndex {
                filename: filename.to_string(),
                tokens: task.indexes.iter().map(|e| e.token.clone()).collect(),
            }),
        };
    }

    if task.use_file_name.is_active() {
        let key = match task.use_file_name.strip_pattern() {
            Some(sub) => walked_path.replacen(sub, "", 1),
            None => walked_path.to_string(),
        };
        return Ok(ResolvedName {
            index: Some(format!("'{key}'")),
            property: String::new(),
        });
    }

    Ok(ResolvedName {
        index: None,
        property: stem(remainder).to_string(),
    })
}

/// Everything up to (excluding) the final `.`; empty when there is none.
///
/// A dotless name therefore binds to the bare variable/slot rather than a
/// property named after itself. Preserved boundary behavior.
fn stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => "",
    }
}
