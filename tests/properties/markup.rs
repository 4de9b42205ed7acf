//! Property tests for the markup renderer.

use proptest::prelude::*;

use billboard::markup::render;

/// Lines free of every block and inline marker
fn plain_text() -> impl Strategy<Value = String> {
    let line = proptest::string::string_regex("[a-z <>&\"]{0,40}").unwrap();
    proptest::collection::vec(line, 0..=6).prop_map(|lines| lines.join("\n"))
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering never panics and is a pure function of its input.
    #[test]
    fn property_render_is_deterministic(
        s in "(?s).{0,512}"
    ) {
        let first = render(&s);
        prop_assert_eq!(first, render(&s));
    }

    /// PROPERTY: Every `<` and `>` in plain text reaches the output escaped.
    #[test]
    fn property_plain_text_is_escaped(
        s in plain_text()
    ) {
        let html = render(&s);
        prop_assert_eq!(count(&html, "&lt;"), count(&s, "<"));
        prop_assert_eq!(count(&html, "&gt;"), count(&s, ">"));
        prop_assert_eq!(count(&html, "&quot;"), count(&s, "\""));
    }

    /// PROPERTY: Inline formatting always closes what it opens.
    #[test]
    fn property_inline_tags_balance(
        s in "[a-z *_`]{0,80}"
    ) {
        let html = render(&s);
        prop_assert_eq!(count(&html, "<strong>"), count(&html, "</strong>"));
        prop_assert_eq!(count(&html, "<em>"), count(&html, "</em>"));
        prop_assert_eq!(count(&html, "<code>"), count(&html, "</code>"));
    }
}
