//! XML text helpers shared by the package writers.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Built once on first use
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Characters XML 1.0 does not allow anywhere in a document.
#[inline]
fn is_forbidden_xml_char(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Escape XML special characters and drop characters XML cannot carry.
///
/// # Examples
///
/// ```
/// use specdoc::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("bell\u{7}"), "bell");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    let escaped = XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]);
    if escaped.contains(is_forbidden_xml_char) {
        escaped.chars().filter(|&c| !is_forbidden_xml_char(c)).collect()
    } else {
        escaped
    }
}

/// XML declaration placed at the top of every part.
pub(crate) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// WordprocessingML main namespace.
pub(crate) const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Office document relationships namespace.
pub(crate) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom's & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&apos;s &amp; Jerry&apos;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape_xml("User Query → Claude Desktop"), "User Query → Claude Desktop");
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn test_forbidden_control_characters_dropped() {
        assert_eq!(escape_xml("a\u{0}b\u{1B}c\u{FFFF}"), "abc");
        assert_eq!(escape_xml("line\nnext\r\tend"), "line\nnext\r\tend");
        assert_eq!(escape_xml("x\u{8}<y"), "x&lt;y");
    }
}
