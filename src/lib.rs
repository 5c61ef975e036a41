//! # filebind
//!
//! Binds directory contents to script variables. Your filesystem is the
//! data source: each file in a content directory becomes one generated
//! assignment statement, appended to a base source file to produce a
//! single artifact.
//!
//! ```text
//! content/strings/          src/app-base.js         dist/app.js
//! ├── 00-title.txt     +    var app = ...      →    var app = ...
//! ├── 01-title.txt                                  app.strings[0].title = 'Dawn';
//! └── notes.md (skipped)                            app.strings[1].title = 'Dusk';
//! ```
//!
//! # Architecture: Four-Stage Pipeline
//!
//! Every walked file passes through four small stages, each a pure
//! function:
//!
//! ```text
//! 1. filter    does this filename participate?        (prefix + extension)
//! 2. naming    where does its content land?           (index + property)
//! 3. encode    what literal represents its content?   (text/JSON/base64)
//! 4. emit      the assignment statement
//! ```
//!
//! The [`generate`] driver runs them in order per file, strictly
//! sequentially, accumulating statements in walk order. This separation
//! exists for three reasons:
//!
//! - **Testability**: each stage is exercised without a filesystem.
//! - **One write**: all content is computed before the destination is
//!   opened, so a failed run never leaves a half-written artifact.
//! - **Dry runs**: `check` shares the whole compute path with `build` and
//!   simply skips the final write.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `filebind.toml` task list: loading, defaults, validation |
//! | [`filter`] | Stage 1 — prefix/extension acceptance predicate |
//! | [`naming`] | Stage 2 — index token + property name from the filename |
//! | [`encode`] | Stage 3 — file bytes to embedded literal (text, JSON, base64) |
//! | [`emit`] | Stage 4 — target expression and statement composition |
//! | [`generate`] | Per-task driver: walk, run stages, assemble, write once |
//! | [`output`] | CLI report formatting — what got bound where |
//!
//! # Design Decisions
//!
//! ## Fatal Means Fatal
//!
//! A file the filter rejects is skipped and counted; everything else that
//! goes wrong (a filename no index token matches, minify on malformed
//! JSON, an unreadable file) aborts the entire run before the destination
//! is touched. There is no skip-and-continue for errors: a generated
//! artifact is either complete or absent, never silently missing pieces.
//!
//! ## Ordered Index Tables
//!
//! The `indexes` option is an ordered list of `{token, value}` rows, not a
//! map. When several tokens prefix the same filename the last matching row
//! wins, so authors resolve overlapping tokens (`"0"` vs `"01"`) by
//! ordering them. Lookup is per-file and the table never mutates.
//!
//! ## Sorted Walks
//!
//! The directory walk sorts entries by file name within each directory.
//! Statement order is therefore stable across runs and machines, and two
//! runs over the same tree produce byte-identical artifacts.
//!
//! ## Known Limitation: Single Quotes
//!
//! Text content embeds between single quotes with only newlines escaped.
//! A file containing `'` or a trailing backslash produces a broken
//! literal. Fixing this would change every emitted artifact, so the
//! behavior stays; keep quotes out of bound content or switch the file to
//! base64.

pub mod config;
pub mod emit;
pub mod encode;
pub mod filter;
pub mod generate;
pub mod naming;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
