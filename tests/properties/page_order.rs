//! Property tests for carousel page ordering.

use proptest::prelude::*;

use billboard::PageName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Page order agrees with integer order for numbers that fit.
    #[test]
    fn property_pages_order_numerically(
        a in any::<u64>(),
        b in any::<u64>()
    ) {
        let pa = PageName::parse(&format!("carousel.{a}.adoc"), "adoc").unwrap();
        let pb = PageName::parse(&format!("carousel.{b}.adoc"), "adoc").unwrap();
        prop_assert_eq!(pa.cmp(&pb), a.cmp(&b));
    }

    /// PROPERTY: Leading zeros do not change the page number.
    #[test]
    fn property_leading_zeros_ignored(
        n in any::<u32>(),
        zeros in 0usize..5
    ) {
        let name = format!("carousel.{}{n}.adoc", "0".repeat(zeros));
        let page = PageName::parse(&name, "adoc").unwrap();
        prop_assert_eq!(page.number(), n.to_string());
    }

    /// PROPERTY: Parsing arbitrary file names never panics.
    #[test]
    fn property_parse_never_panics(
        s in "(?s).{0,64}"
    ) {
        let _ = PageName::parse(&s, "adoc");
    }
}
