//! Property tests for configuration parsing.

use std::path::Path;

use proptest::prelude::*;

use billboard::config::parse_with_warnings;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary text either parses or errors, never panics.
    #[test]
    fn property_config_parse_never_panics(
        s in "(?s).{0,256}"
    ) {
        let _ = parse_with_warnings(&s, Path::new("fuzz.toml"));
    }

    /// PROPERTY: Any in-range port round-trips through TOML.
    #[test]
    fn property_http_port_parses(
        port in any::<u16>()
    ) {
        let toml = format!("[http]\nport = {port}\n");
        let (config, warnings) = parse_with_warnings(&toml, Path::new("p.toml")).unwrap();
        prop_assert_eq!(config.http.port, port);
        prop_assert!(warnings.is_empty());
    }
}
