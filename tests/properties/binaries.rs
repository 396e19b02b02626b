//! Property tests for managed binary detection.

use proptest::prelude::*;

use rea::application::assemble::is_managed_binary;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: matching agrees with a lowercase `.dll` suffix check.
    #[test]
    fn property_matches_lowercase_suffix(name in "(?s).{0,32}") {
        prop_assert_eq!(
            is_managed_binary(&name),
            name.to_ascii_lowercase().ends_with(".dll")
        );
    }

    /// PROPERTY: any casing of the extension is accepted.
    #[test]
    fn property_extension_case_is_ignored(
        stem in "[A-Za-z0-9._-]{0,16}",
        ext in "[dD][lL][lL]"
    ) {
        let name = format!("{}.{}", stem, ext);
        prop_assert!(is_managed_binary(&name));
    }
}
