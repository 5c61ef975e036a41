//! Assignment statement composition.
//!
//! The last stage of the pipeline: a resolved name and an encoded literal
//! become one source line of the form
//!
//! ```text
//! app.strings[1].title = 'Morning';
//! ```
//!
//! framed by a leading newline (separation from the base file and prior
//! statements) and a trailing newline.

use crate::naming::ResolvedName;

/// The left-hand accessor expression: variable, optional `[index]`,
/// optional `.property`, then the configured suffix verbatim.
///
/// - variable `app.strings`, index `1`, property `title` → `app.strings[1].title`
/// - variable `cache`, index `'img/photo.jpg'`, no property → `cache['img/photo.jpg']`
/// - variable `app`, no index, property `headline`, suffix `.value` → `app.headline.value`
pub fn target_expr(variable: &str, resolved: &ResolvedName, suffix: &str) -> String {
    let mut target = String::from(variable);
    if let Some(index) = &resolved.index {
        target.push('[');
        target.push_str(index);
        target.push(']');
    }
    if !resolved.property.is_empty() {
        target.push('.');
        target.push_str(&resolved.property);
    }
    target.push_str(suffix);
    target
}

/// One full statement: `\n<target> = <value>;\n`.
pub fn statement(target: &str, value: &str) -> String {
    format!("\n{target} = {value};\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(index: Option<&str>, property: &str) -> ResolvedName {
        ResolvedName {
            index: index.map(String::from),
            property: property.to_string(),
        }
    }

    #[test]
    fn indexed_property_target() {
        let target = target_expr("app.strings", &name(Some("1"), "title"), "");
        assert_eq!(target, "app.strings[1].title");
    }

    #[test]
    fn plain_property_target() {
        let target = target_expr("app", &name(None, "headline"), "");
        assert_eq!(target, "app.headline");
    }

    #[test]
    fn quoted_index_without_property() {
        let target = target_expr("cache", &name(Some("'img/photo.jpg'"), ""), "");
        assert_eq!(target, "cache['img/photo.jpg']");
    }

    #[test]
    fn empty_property_binds_bare_variable() {
        let target = target_expr("app.notes", &name(None, ""), "");
        assert_eq!(target, "app.notes");
    }

    #[test]
    fn suffix_appends_verbatim() {
        let target = target_expr("app", &name(Some("0"), "title"), ".value");
        assert_eq!(target, "app[0].title.value");
    }

    #[test]
    fn statement_is_newline_framed() {
        let s = statement("app.title", "'Morning'");
        assert_eq!(s, "\napp.title = 'Morning';\n");
    }

    #[test]
    fn json_value_embeds_without_quotes() {
        let s = statement("app.config", r#"{"a":1}"#);
        assert_eq!(s, "\napp.config = {\"a\":1};\n");
    }
}
