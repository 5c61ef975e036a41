//! File contents → the literal embedded in the generated statement.
//!
//! Three encodings, decided by task flags:
//!
//! - `base64`: a single-quoted `data:<mime>;base64,<payload>` URI, MIME
//!   guessed from the file extension. Wins over every other flag.
//! - `minify`: the text is parsed as JSON-with-comments (`//` and
//!   `/* */` comments allowed, nothing looser) and re-serialized compactly.
//! - plain: the text as read.
//!
//! Plain and minified text then has every newline replaced by the
//! two-character escape `\n`, keeping each statement on one source line,
//! and is single-quoted unless the driver marks the file as JSON (JSON
//! literal syntax embeds bare).
//!
//! ## Known limitation
//!
//! Embedded single quotes and backslashes are not escaped; only newlines
//! are transformed. Content containing `'` produces a broken literal.
//! Carried deliberately so emitted artifacts stay stable; see the crate
//! docs.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use json_comments::StripComments;
use thiserror::Error;

use crate::config::TaskConfig;

#[derive(Error, Debug)]
pub enum EncodeError {
    /// Minify mode on content that is not JSON-with-comments. Fatal:
    /// aborts the whole run.
    #[error("'{path}' is not valid JSON-with-comments: {source}")]
    MalformedJson {
        path: String,
        source: serde_json::Error,
    },
}

/// Encode one file's bytes as the assignment's right-hand literal.
///
/// `treat_as_json` comes from the driver (the filter entry that accepted
/// the file was `"json"`); it suppresses quoting so the content embeds as
/// a bare JSON expression.
pub fn encode(
    path: &Path,
    bytes: &[u8],
    task: &TaskConfig,
    treat_as_json: bool,
) -> Result<String, EncodeError> {
    if task.base64 {
        return Ok(format!("'{}'", data_uri(path, bytes)));
    }

    // Lossy: binary junk becomes replacement characters instead of a
    // fourth error class, matching the source platform's coercion.
    let text = String::from_utf8_lossy(bytes);
    let text = if task.minify {
        minify(path, &text)?
    } else {
        text.into_owned()
    };

    // Compact JSON has no newlines, so for minified text this is a no-op.
    // Carriage returns pass through untouched.
    let line = text.replace('\n', "\\n");
    if treat_as_json {
        Ok(line)
    } else {
        Ok(format!("'{line}'"))
    }
}

/// `data:<mime>;base64,<payload>` for the given bytes, MIME resolved from
/// the path's extension with an octet-stream fallback.
pub fn data_uri(path: &Path, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Parse as JSON-with-comments and re-serialize compactly. Comments are
/// stripped before parsing; key order is preserved through serde_json's
/// preserve_order feature.
fn minify(path: &Path, text: &str) -> Result<String, EncodeError> {
    let value: serde_json::Value = serde_json::from_reader(StripComments::new(text.as_bytes()))
        .map_err(|source| EncodeError::MalformedJson {
            path: path.display().to_string(),
            source,
        })?;
    Ok(value.to_string())
}
