//! Filename acceptance for the scan stage.
//!
//! A file participates in generation only when its name carries the
//! configured prefix and one of the configured extensions. Everything else
//! is skipped silently; rejection is never an error.
//!
//! ## Extension matching
//!
//! Extensions are raw suffixes, matched case-sensitively with no implied
//! dot. `"json"` therefore matches both `data.json` and `data.myjson`.
//! An unrestricted filter (the default) accepts every name that passes the
//! prefix check.

use crate::config::ExtensionFilter;

/// Decide whether a filename participates in generation.
///
/// - `"str-title.txt"` with prefix `"str-"`, extensions `"txt"` → accepted
/// - `"title.txt"` with prefix `"str-"` → rejected (prefix missing)
/// - `"str-logo.png"` with prefix `"str-"`, extensions `"txt"` → rejected
/// - any name with prefix `""` and an unrestricted filter → accepted
pub fn matches(filename: &str, prefix: &str, extensions: &ExtensionFilter) -> bool {
    if !prefix.is_empty() && !filename.starts_with(prefix) {
        return false;
    }
    let entries = extensions.entries();
    entries.is_empty() || entries.iter().any(|ext| filename.ends_with(ext.as_str()))
}

/// The configured extension that accepted this filename, in filter order.
///
/// `None` when the filter is unrestricted. The driver embeds a file's
/// contents unquoted exactly when this returns `"json"`.
pub fn matched_extension<'a>(filename: &str, extensions: &'a ExtensionFilter) -> Option<&'a str> {
    extensions
        .entries()
        .iter()
        .find(|ext| filename.ends_with(ext.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(ext: &str) -> ExtensionFilter {
        ExtensionFilter::Single(ext.to_string())
    }

    fn many(exts: &[&str]) -> ExtensionFilter {
        ExtensionFilter::Many(exts.iter().map(|e| e.to_string()).collect())
    }

    #[test]
    fn accepts_prefix_and_extension() {
        assert!(matches("str-title.txt", "str-", &single("txt")));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(!matches("title.txt", "str-", &single("txt")));
    }

    #[test]
    fn rejects_wrong_extension() {
        assert!(!matches("str-logo.png", "str-", &single("txt")));
    }

    #[test]
    fn empty_prefix_skips_prefix_check() {
        assert!(matches("anything.txt", "", &single("txt")));
    }

    #[test]
    fn unrestricted_filter_accepts_everything() {
        assert!(matches("notes.md", "", &ExtensionFilter::default()));
        assert!(matches("Makefile", "", &many(&[])));
    }

    #[test]
    fn any_listed_extension_accepts() {
        let filter = many(&["txt", "json"]);
        assert!(matches("a.txt", "", &filter));
        assert!(matches("b.json", "", &filter));
        assert!(!matches("c.png", "", &filter));
    }

    #[test]
    fn extension_is_a_raw_suffix() {
        // No dot is implied by the filter entry.
        assert!(matches("data.myjson", "", &single("json")));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!matches("photo.PNG", "", &single("png")));
        assert!(!matches("STR-a.txt", "str-", &single("txt")));
    }

    #[test]
    fn matched_extension_reports_first_in_filter_order() {
        let filter = many(&["json", "txt"]);
        assert_eq!(matched_extension("data.json", &filter), Some("json"));
        assert_eq!(matched_extension("notes.txt", &filter), Some("txt"));
    }

    #[test]
    fn matched_extension_none_when_unrestricted() {
        assert_eq!(matched_extension("data.json", &many(&[])), None);
        assert_eq!(matched_extension("data.json", &ExtensionFilter::default()), None);
    }
}
