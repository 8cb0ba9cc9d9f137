//! Bracketed keyword links.
//!
//! Page content links to other pages with `[keyword]` references. A keyword
//! is the text between an innermost pair of square brackets: it must be
//! non-empty and may contain neither `[` nor `]`. Consequently `[[X]]`
//! yields `X`, `[a[b]c]` yields `b`, and `[]` yields nothing.
//!
//! Matching is purely lexical. Keywords are compared byte-for-byte with no
//! case folding or whitespace trimming.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::Page;

static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]").expect("keyword pattern is valid"));

/// Extracts the distinct keywords referenced in `content`, in order of first
/// appearance.
#[must_use]
pub fn extract_keywords(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    KEYWORD_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|keyword| seen.insert(*keyword))
        .map(str::to_owned)
        .collect()
}

/// Wraps a keyword in square brackets, the form searched for in content.
#[must_use]
pub fn bracketed(keyword: &str) -> String {
    format!("[{keyword}]")
}

/// Returns true if `page` is related to the page titled `current_title`
/// through any of `keywords`.
///
/// A page is related when it is not the current page and either its content
/// contains `[K]` or its title is `K`, for some keyword `K`.
#[must_use]
pub fn is_related(page: &Page, current_title: &str, keywords: &[String]) -> bool {
    if page.title == current_title {
        return false;
    }
    keywords
        .iter()
        .any(|k| page.title == *k || page.content.contains(&bracketed(k)))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn extracts_single_bracket_keywords_in_order() {
        let keywords = extract_keywords("see [Foo] and [Bar], then [Foo] again");
        assert_eq!(keywords, vec!["Foo", "Bar"]);
    }

    #[test]
    fn no_brackets_no_keywords() {
        assert!(extract_keywords("plain text").is_empty());
        assert!(extract_keywords("unclosed [bracket").is_empty());
        assert!(extract_keywords("empty [] pair").is_empty());
    }

    #[test]
    fn nested_brackets_yield_innermost() {
        assert_eq!(extract_keywords("[[X]]"), vec!["X"]);
        assert_eq!(extract_keywords("[a[b]c]"), vec!["b"]);
        assert_eq!(extract_keywords("[a]]"), vec!["a"]);
    }

    #[test]
    fn keywords_are_not_normalized() {
        assert_eq!(
            extract_keywords("[ Foo ] [foo] [Foo]"),
            vec![" Foo ", "foo", "Foo"]
        );
    }

    #[test]
    fn keywords_may_span_lines_and_hold_symbols() {
        assert_eq!(extract_keywords("[a\nb] [50%_off]"), vec!["a\nb", "50%_off"]);
    }

    #[test]
    fn bracketed_wraps_keyword() {
        assert_eq!(bracketed("Foo"), "[Foo]");
    }

    #[test]
    fn relation_excludes_self_and_matches_content_or_title() {
        let now = Utc::now();
        let keywords = vec!["Y".to_string()];

        let x = Page::new("X", "[Y]", now);
        let y = Page::new("Y", "about Y", now);
        let w = Page::new("W", "also about [Y]", now);
        let z = Page::new("Z", "unrelated", now);
        let lower = Page::new("L", "about [y]", now);

        assert!(!is_related(&x, "X", &keywords));
        assert!(is_related(&y, "X", &keywords));
        assert!(is_related(&w, "X", &keywords));
        assert!(!is_related(&z, "X", &keywords));
        assert!(!is_related(&lower, "X", &keywords));
    }

    #[test]
    fn relation_requires_keywords() {
        let page = Page::new("Y", "[Y]", Utc::now());
        assert!(!is_related(&page, "X", &[]));
    }
}
