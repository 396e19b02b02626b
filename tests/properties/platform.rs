//! Property tests for host platform mapping.

use proptest::prelude::*;

use rea::{AssembleError, HostOs, Platform};

const KNOWN: &[&str] = &["windows", "macos", "linux"];

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any OS name outside the supported set is rejected and named in the error.
    #[test]
    fn property_unknown_os_is_unsupported(
        os in "[a-z0-9_]{1,16}".prop_filter("known OS", |s| !KNOWN.contains(&s.as_str()))
    ) {
        let err = Platform::from_host(&HostOs::from_os_str(&os)).unwrap_err();
        match err {
            AssembleError::UnsupportedPlatform { os: reported } => prop_assert_eq!(reported, os),
            other => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// PROPERTY: host OS parsing is total and never panics.
    #[test]
    fn property_host_parse_never_panics(os in "(?s).{0,64}") {
        let host = HostOs::from_os_str(&os);
        let _ = Platform::from_host(&host);
    }
}

#[test]
fn supported_hosts_map_to_exactly_one_platform() {
    let mapped: Vec<Platform> = KNOWN
        .iter()
        .map(|os| Platform::from_host(&HostOs::from_os_str(os)).unwrap())
        .collect();

    assert_eq!(mapped, Platform::ALL.to_vec());
    assert_eq!(
        mapped.iter().map(|p| p.runtime_identifier()).collect::<Vec<_>>(),
        vec!["win-x64", "osx-x64", "linux-x64"]
    );
}
