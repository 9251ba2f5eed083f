// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Registry and host configuration.
//!
//! Every field has a default matching the behavior pages were written
//! against, so `Config::default()` is what most hosts want. A JSON file can
//! override any subset of the fields.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// A third-party library a page may have loaded through its own script tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyLibrary {
    /// Global name, dotted for members (`THREE.Projector`)
    pub global: String,

    /// Module identifier to provide it under
    pub module: String,

    /// Another global that must also be present
    #[serde(default)]
    pub requires: Option<String>,

    /// Publish `{ <wrap_as>: library }` instead of the library itself
    #[serde(default)]
    pub wrap_as: Option<String>,

    /// Suppress the duplicate-registration warning
    #[serde(default)]
    pub override_duplicate: bool,
}

impl LegacyLibrary {
    /// A library published as-is under `module`.
    pub fn new(global: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            global: global.into(),
            module: module.into(),
            requires: None,
            wrap_as: None,
            override_duplicate: false,
        }
    }

    fn requiring(mut self, global: &str) -> Self {
        self.requires = Some(global.to_string());
        self
    }

    fn wrapped_as(mut self, key: &str) -> Self {
        self.wrap_as = Some(key.to_string());
        self
    }

    fn overriding(mut self) -> Self {
        self.override_duplicate = true;
        self
    }
}

/// Configuration for the module registry and its host glue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Leading prefix stripped from every identifier
    pub root_prefix: String,

    /// Leaf name that publishes as its containing directory
    pub index_name: String,

    /// Extensions stripped from identifiers
    pub extensions: Vec<String>,

    /// Basenames that `require` answers with `undefined`
    pub ignored_modules: Vec<String>,

    /// Globals registered by `register_external_libraries`
    pub legacy_libraries: Vec<LegacyLibrary>,

    /// Modules required for side effects only, provided as empty objects
    pub stub_modules: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_prefix: "app/".to_string(),
            index_name: "index".to_string(),
            extensions: vec![".js".to_string()],
            ignored_modules: vec!["phpunserialize".to_string()],
            legacy_libraries: default_legacy_libraries(),
            stub_modules: [
                "angular-route",
                "angular-bootstrap",
                "angular-dialog-service",
                "angular-sanitize",
                "ng-simplePagination",
                "bootstrap",
                "es6-shim",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
        }
    }
}

fn default_legacy_libraries() -> Vec<LegacyLibrary> {
    vec![
        LegacyLibrary::new("Promise", "promise"),
        LegacyLibrary::new("$", "jquery"),
        LegacyLibrary::new("Parse", "parse").wrapped_as("Parse"),
        LegacyLibrary::new("angular", "angular"),
        LegacyLibrary::new("TWEEN", "tween.js"),
        LegacyLibrary::new("dat", "dat.gui"),
        LegacyLibrary::new("THREE", "three").overriding(),
        LegacyLibrary::new("ThreeBSP", "ThreeCSG").overriding(),
        // THREE examples and extensions
        LegacyLibrary::new("THREE.Projector", "THREE.Projector"),
        LegacyLibrary::new("THREE.MTLLoader", "THREE.MTLLoader"),
        LegacyLibrary::new("THREE.StereoEffect", "THREE.StereoEffect"),
        LegacyLibrary::new("THREEx.RendererStats", "threex.rendererstats").requiring("THREE"),
        LegacyLibrary::new("Detector", "THREE.Detector").requiring("THREE"),
        LegacyLibrary::new("Stats", "stats.js").requiring("THREE"),
    ]
}

impl Config {
    /// Parse a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Overlay the keys present in a JSON file onto this configuration.
    pub fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let overrides: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&content)?;

        let mut current = match serde_json::to_value(&*self)? {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        current.extend(overrides);

        *self = serde_json::from_value(serde_json::Value::Object(current))?;
        Ok(())
    }

    /// Whether `require` should short-circuit this basename.
    pub fn is_ignored(&self, basename: &str) -> bool {
        self.ignored_modules.iter().any(|name| name == basename)
    }
}
