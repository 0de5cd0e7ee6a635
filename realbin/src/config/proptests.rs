//! Property-based tests for configuration merging.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::merger::ConfigMerger;
use super::schema::{Config, StyleSetting};
use proptest::prelude::*;

fn style_strategy() -> impl Strategy<Value = StyleSetting> {
    prop_oneof![
        Just(StyleSetting::Auto),
        Just(StyleSetting::Posix),
        Just(StyleSetting::Windows),
    ]
}

fn common_paths_strategy() -> impl Strategy<Value = BTreeMap<String, Vec<PathBuf>>> {
    prop::collection::btree_map(
        "(npm|pnpm|yarn)",
        prop::collection::vec("/[a-z]{1,6}(/[a-z]{1,6}){0,2}".prop_map(PathBuf::from), 0..4),
        0..3,
    )
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(style_strategy()),
        prop::option::of(1usize..=64),
        prop::option::of("/[a-z]{1,8}"),
        prop::option::of(common_paths_strategy()),
    )
        .prop_map(|(style, max_hops, search_path, common_paths)| Config {
            style,
            max_hops,
            search_path,
            common_paths,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        .. ProptestConfig::default()
    })]

    #[test]
    fn merge_with_default_is_identity(config in config_strategy()) {
        let mut target = config.clone();
        ConfigMerger::merge_into(&mut target, &Config::default());
        prop_assert_eq!(target, config);
    }

    #[test]
    fn later_scalars_win(low in config_strategy(), high in config_strategy()) {
        let mut target = low.clone();
        ConfigMerger::merge_into(&mut target, &high);
        prop_assert_eq!(target.style, high.style.or(low.style));
        prop_assert_eq!(target.max_hops, high.max_hops.or(low.max_hops));
        prop_assert_eq!(target.search_path, high.search_path.or(low.search_path));
    }

    #[test]
    fn common_paths_keep_every_entry(low in config_strategy(), high in config_strategy()) {
        let mut target = low.clone();
        ConfigMerger::merge_into(&mut target, &high);
        let merged = target.common_paths.unwrap_or_default();
        for source in [&low, &high] {
            for (name, paths) in source.common_paths.iter().flatten() {
                let entries = merged.get(name);
                prop_assert!(entries.is_some());
                for path in paths {
                    prop_assert!(entries.is_some_and(|entries| entries.contains(path)));
                }
            }
        }
    }

    #[test]
    fn merge_is_idempotent(low in config_strategy(), high in config_strategy()) {
        let mut once = low;
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }
}
