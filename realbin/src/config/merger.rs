//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! with special handling for the accumulated `common_paths` table.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use realbin::config::{Config, ConfigMerger};
///
/// let low = Config { max_hops: Some(3), ..Default::default() };
/// let high = Config { max_hops: Some(8), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_hops, Some(8));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        // Process in order (lowest to highest precedence)
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Common paths: accumulated per tool, source entries first
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.style.is_some() {
            target.style = source.style;
        }

        if source.max_hops.is_some() {
            target.max_hops = source.max_hops;
        }

        if source.search_path.is_some() {
            target.search_path.clone_from(&source.search_path);
        }

        if let Some(source_paths) = &source.common_paths {
            let merged = match target.common_paths.take() {
                Some(existing) => Self::merge_common_paths(existing, source_paths),
                None => source_paths.clone(),
            };
            target.common_paths = Some(merged);
        }
    }

    /// Put the higher-precedence entries for each tool in front, dropping
    /// duplicates.
    fn merge_common_paths(
        mut target: BTreeMap<String, Vec<PathBuf>>,
        source: &BTreeMap<String, Vec<PathBuf>>,
    ) -> BTreeMap<String, Vec<PathBuf>> {
        for (name, paths) in source {
            let existing = target.remove(name).unwrap_or_default();
            let mut combined = paths.clone();
            for path in existing {
                if !combined.contains(&path) {
                    combined.push(path);
                }
            }
            target.insert(name.clone(), combined);
        }
        target
    }
}
