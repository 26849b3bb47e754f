//! Property tests for logical path parsing.

use proptest::prelude::*;

use armory::LogicalPath;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9 _-]{0,11}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = LogicalPath::parse(&s);
    }

    /// PROPERTY: a well-formed path prints back unchanged.
    #[test]
    fn property_display_round_trip(segments in proptest::collection::vec(segment(), 1..6)) {
        let raw = segments.join("/");
        let path = LogicalPath::parse(&raw).unwrap();

        prop_assert_eq!(path.to_string(), raw);
        prop_assert_eq!(path.depth(), segments.len() - 1);
    }

    /// PROPERTY: descending visits every prefix below the root, in order.
    #[test]
    fn property_descend_yields_growing_prefixes(segments in proptest::collection::vec(segment(), 1..6)) {
        let path = LogicalPath::parse(&segments.join("/")).unwrap();

        let cumulative: Vec<String> = path.descend().map(|step| step.cumulative).collect();
        let expected: Vec<String> = (2..=segments.len())
            .map(|n| segments[..n].join("/"))
            .collect();

        prop_assert_eq!(cumulative, expected);
    }
}
