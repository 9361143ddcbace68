//! Documentation annotation handling
//!
//! Schema definitions may carry `annotation/documentation` content. This
//! module extracts that text, strips embedded markup, trims each line and
//! drops blanks, producing the list of comment lines attached to the
//! corresponding declaration. The renderer emits a single-line comment
//! when exactly one line remains and a block otherwise.

use crate::tree::Node;
use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Extract the raw documentation text of a definition node, if any
pub fn extract_doc(node: &Node) -> Option<String> {
    let annotation = node.first_child("annotation")?;
    let documentation = annotation.first_child("documentation")?;
    documentation.text.clone()
}

/// Clean documentation text into comment lines.
///
/// Returns `None` when nothing remains, so the declaration is emitted
/// undecorated.
pub fn format_doc(text: &str) -> Option<Vec<String>> {
    let stripped = MARKUP_TAG.replace_all(text, "");
    let lines: Vec<String> = stripped
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines)
    }
}

/// Extract and clean a node's documentation in one step
pub fn doc_lines(node: &Node) -> Option<Vec<String>> {
    extract_doc(node).and_then(|t| format_doc(&t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_doc() {
        let node = Node::parse(
            r#"<element>
                 <annotation><documentation>The device token.</documentation></annotation>
               </element>"#,
        )
        .unwrap();
        assert_eq!(doc_lines(&node), Some(vec!["The device token.".to_string()]));
    }

    #[test]
    fn test_no_annotation() {
        let node = Node::parse("<element/>").unwrap();
        assert_eq!(doc_lines(&node), None);
    }

    #[test]
    fn test_markup_stripped() {
        let out = format_doc("See <b>the manual</b> for details.").unwrap();
        assert_eq!(out, vec!["See the manual for details."]);
    }

    #[test]
    fn test_blank_lines_dropped_and_trimmed() {
        let out = format_doc("  first line  \n\n   \n  second line ").unwrap();
        assert_eq!(out, vec!["first line", "second line"]);
    }

    #[test]
    fn test_only_markup_yields_none() {
        assert_eq!(format_doc("<p></p>"), None);
        assert_eq!(format_doc("   \n "), None);
    }
}
