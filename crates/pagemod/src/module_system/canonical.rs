// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Module identifier canonicalization

use crate::config::Config;
use crate::path;

/// Compute the registry key for a module identifier.
///
/// Normalizes `.`/`..`/doubled separators, strips the root prefix, then
/// collapses an index leaf (`index` or `index.js`) into its directory. Other
/// extensions are part of the identifier: `tween.js` and `tween` differ. Two
/// identifiers name the same module iff this returns the same key for both.
pub fn canonicalize(id: &str, config: &Config) -> String {
    let normalized = path::normalize(id);

    let key = match normalized.strip_prefix(config.root_prefix.as_str()) {
        Some(rest) if !config.root_prefix.is_empty() => rest,
        _ => normalized.as_str(),
    };

    // index publishes as the containing directory, with or without extension
    let is_index = std::iter::once(None)
        .chain(config.extensions.iter().map(|ext| Some(ext.as_str())))
        .any(|ext| path::basename(key, ext) == config.index_name);
    if is_index {
        return path::dirname(key);
    }

    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: &str) -> String {
        canonicalize(id, &Config::default())
    }

    #[test]
    fn test_strips_root_prefix() {
        assert_eq!(key("app/widgets/list"), "widgets/list");
        assert_eq!(key("widgets/list"), "widgets/list");
        assert_eq!(key("lib/app/x"), "lib/app/x");
    }

    #[test]
    fn test_index_collapses_to_directory() {
        assert_eq!(key("a/b/index"), "a/b");
        assert_eq!(key("app/widgets/index.js"), "widgets");
        assert_eq!(key("a/b/indexes"), "a/b/indexes");
    }

    #[test]
    fn test_keeps_extension_outside_index() {
        assert_eq!(key("app/widgets/list.js"), "widgets/list.js");
        assert_eq!(key("tween.js"), "tween.js");
        assert_ne!(key("app/tween.js"), key("tween"));
        assert_eq!(key("data.json"), "data.json");
    }

    #[test]
    fn test_normalizes_segments() {
        assert_eq!(key("app/./widgets//list"), "widgets/list");
        assert_eq!(key("app/widgets/../util"), "util");
    }

    #[test]
    fn test_custom_config() {
        let config = Config {
            root_prefix: "src/".to_string(),
            index_name: "main".to_string(),
            extensions: vec![".mjs".to_string()],
            ..Config::default()
        };
        assert_eq!(canonicalize("src/lib/main.mjs", &config), "lib");
        assert_eq!(canonicalize("app/lib/index", &config), "app/lib/index");
    }
}
