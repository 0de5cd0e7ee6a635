//! Property-based tests for path handling.
//!
//! Note: The normalize and algebra modules carry small property suites of
//! their own. This module runs heavier cases across both styles and mixed
//! separators.

use super::{normalize_str, split_prefix, PathStyle};
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-zA-Z0-9_-]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\")]
}

// Paths that may start with a drive, a root, a UNC pair or nothing at all
fn any_path_strategy() -> impl Strategy<Value = String> {
    let prefix = prop_oneof![
        Just(String::new()),
        Just("/".to_string()),
        Just("\\".to_string()),
        Just("C:\\".to_string()),
        Just("d:/".to_string()),
        Just("\\\\srv\\share\\".to_string()),
        Just("//?/".to_string()),
    ];
    (
        prefix,
        prop::collection::vec((component_strategy(), separator_strategy()), 0..8),
    )
        .prop_map(|(prefix, parts)| {
            let mut path = prefix;
            for (component, sep) in parts {
                path.push_str(&component);
                path.push_str(sep);
            }
            path
        })
}

fn drive_path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just('C'), Just('c'), Just('D')],
        prop::collection::vec("[a-cA-C]{1,3}", 0..6),
    )
        .prop_map(|(drive, parts)| format!("{drive}:\\{}", parts.join("\\")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(path in any_path_strategy()) {
        let once = normalize_str(&path);
        prop_assert_eq!(normalize_str(&once), once);
    }

    // Normalized paths never contain backslashes or "." segments
    #[test]
    fn normalized_form_is_clean(path in any_path_strategy()) {
        let normalized = normalize_str(&path);
        prop_assert!(!normalized.contains('\\'));
        if normalized != "." {
            let (_, rest) = split_prefix(&normalized);
            prop_assert!(!rest.split('/').any(|segment| segment == "."));
        }
    }

    // Resolving the relative path from `a` lands back on `b`, ignoring case
    #[test]
    fn windows_relative_round_trip(a in drive_path_strategy(), b in drive_path_strategy()) {
        let style = PathStyle::Windows;
        let rel = style.relative_from("C:/", &a, &b);
        let back = style.resolve_from("C:/", &[a.as_str(), rel.as_str()]);
        prop_assert!(back.eq_ignore_ascii_case(&normalize_str(&b)));
    }

    // Relative results never carry a separator at either end
    #[test]
    fn relative_has_no_edge_separators(a in drive_path_strategy(), b in drive_path_strategy()) {
        let rel = PathStyle::Windows.relative_from("C:/", &a, &b);
        if a.get(..1).map(str::to_ascii_lowercase) == b.get(..1).map(str::to_ascii_lowercase) {
            prop_assert!(!rel.starts_with('/'));
            prop_assert!(!rel.ends_with('/'));
        }
    }
}
