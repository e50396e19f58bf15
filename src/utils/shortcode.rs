//! Parsing of `[ad location="slug"]` shortcodes embedded in content.
//!
//! Two tag names are recognized: `ad` and the legacy `wp-adposts`.
//! Attribute values may be double-quoted, single-quoted or bare.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static SHORTCODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:ad|wp-adposts)(?:\s+([^\]]*))?\]").expect("shortcode regex is valid")
});

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][\w-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"']+))"#)
        .expect("attribute regex is valid")
});

/// One ad shortcode found in a piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcode {
    /// Byte range of the whole `[...]` tag.
    pub span: Range<usize>,
    /// Value of the `location` attribute, if any.
    pub location: Option<String>,
}

/// Finds all ad shortcodes in `content`, in order of appearance.
pub fn find_shortcodes(content: &str) -> Vec<Shortcode> {
    SHORTCODE_REGEX
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let location = caps
                .get(1)
                .and_then(|attrs| attribute(attrs.as_str(), "location"))
                .filter(|slug| !slug.is_empty());

            Some(Shortcode {
                span: whole.range(),
                location,
            })
        })
        .collect()
}

/// Replaces each shortcode with the string produced for it.
///
/// `rendered` must hold one entry per element of `shortcodes`.
pub fn splice(content: &str, shortcodes: &[Shortcode], rendered: &[String]) -> String {
    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;

    for (shortcode, markup) in shortcodes.iter().zip(rendered) {
        output.push_str(&content[cursor..shortcode.span.start]);
        output.push_str(markup);
        cursor = shortcode.span.end;
    }

    output.push_str(&content[cursor..]);
    output
}

fn attribute(attrs: &str, name: &str) -> Option<String> {
    ATTRIBUTE_REGEX.captures_iter(attrs).find_map(|caps| {
        if !caps[1].eq_ignore_ascii_case(name) {
            return None;
        }
        caps.get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().trim().to_string())
    })
}
