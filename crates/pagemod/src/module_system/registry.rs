// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Module registry - define, provide and require

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::{ModuleError, Result};
use crate::module_system::canonical::canonicalize;
use crate::module_system::require::{Module, Require};
use crate::path;
use crate::value::{ObjectRef, Value};

/// In-memory module map plus the directory of the module being defined.
///
/// The registry is single-threaded: it uses `RefCell` internally and is not
/// `Sync`. No borrow is held while a factory runs, so factories may call back
/// into `require`, `provide` and `define`.
#[derive(Debug, Default)]
pub struct Registry {
    config: Config,
    /// Canonical identifier to published value
    modules: RefCell<HashMap<String, Value>>,
    /// Directory relative requires resolve against
    current_dir: RefCell<Option<String>>,
    /// Number of `define` calls currently running
    define_depth: Cell<usize>,
}

impl Registry {
    /// Create a registry with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this registry canonicalizes with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory of the most recently defined module, `None` before any define
    pub fn current_dir(&self) -> Option<String> {
        self.current_dir.borrow().clone()
    }

    /// Publish `definition` under `path`.
    ///
    /// Providing the same value twice only warns. Providing a different
    /// value for a bound identifier is a [`ModuleError::RegistrationConflict`].
    pub fn provide(&self, path: &str, definition: Value) -> Result<()> {
        self.provide_with(path, definition, false)
    }

    /// Like [`provide`](Self::provide), but `override_duplicate` silences the
    /// same-value warning. It never allows replacing a different value.
    pub fn provide_with(&self, path: &str, definition: Value, override_duplicate: bool) -> Result<()> {
        let key = canonicalize(path, &self.config);
        let mut modules = self.modules.borrow_mut();

        match modules.entry(key) {
            Entry::Vacant(slot) => {
                debug!(module = %slot.key(), "provided module");
                slot.insert(definition);
            }
            Entry::Occupied(slot) if slot.get().strict_equals(&definition) => {
                if !override_duplicate {
                    warn!(
                        "Provide failed, called twice on \"{}\" with same definition",
                        slot.key()
                    );
                }
            }
            Entry::Occupied(slot) => return Err(ModuleError::conflict(slot.key().clone())),
        }

        Ok(())
    }

    /// Look up a module.
    ///
    /// Ignored legacy modules answer `undefined`. Identifiers starting with
    /// `.` resolve against [`current_dir`](Self::current_dir). The returned
    /// value is the published one: objects come back as the same shared
    /// reference.
    pub fn require(&self, id: &str) -> Result<Value> {
        if self.config.is_ignored(&path::basename(id, None)) {
            debug!(module = id, "ignored module required");
            return Ok(Value::Undefined);
        }

        let key = self.resolve_id(id)?;
        let found = self.modules.borrow().get(&key).cloned();
        found.ok_or(ModuleError::ModuleNotFound(key))
    }

    /// Compute the registry key `require(id)` would look up.
    ///
    /// Relative identifiers from a module defined at a single-component path
    /// (`main.js`) resolve from the root: `./util` is `util`.
    pub fn resolve_id(&self, id: &str) -> Result<String> {
        if !id.starts_with('.') {
            return Ok(canonicalize(id, &self.config));
        }

        let dir = self.current_dir().ok_or_else(|| {
            ModuleError::usage(format!(
                "relative require \"{}\" issued before any module was defined",
                id
            ))
        })?;
        let resolved = path::resolve_from(&dir, id);
        // A top-level module has directory "", which must not root the result
        let resolved = match resolved.strip_prefix(path::SEP) {
            Some(rest) if dir.is_empty() => rest,
            _ => resolved.as_str(),
        };
        Ok(canonicalize(resolved, &self.config))
    }

    /// Run `factory` and publish what it leaves in `module.exports` under `path`.
    ///
    /// The factory receives the `require` function, a fresh exports container
    /// and the `module` object. If it fails, nothing is published and the
    /// error propagates unchanged.
    ///
    /// A nested `define` restores the enclosing module's directory when it
    /// returns. After the outermost `define`, the current directory stays at
    /// that module's directory.
    #[instrument(level = "debug", skip(self, factory))]
    pub fn define<F>(&self, path: &str, factory: F) -> Result<()>
    where
        F: FnOnce(&Require<'_>, &ObjectRef, &mut Module) -> Result<()>,
    {
        let enclosing = self.current_dir.replace(Some(path::dirname(path)));
        self.define_depth.set(self.define_depth.get() + 1);

        let exports = ObjectRef::new();
        let mut module = Module::new(path, &exports);
        let outcome = factory(&Require::new(self), &exports, &mut module);

        self.define_depth.set(self.define_depth.get() - 1);
        if self.define_depth.get() > 0 {
            *self.current_dir.borrow_mut() = enclosing;
        }

        outcome?;
        self.provide(path, module.exports)
    }

    /// Check if an identifier is bound
    pub fn contains(&self, id: &str) -> bool {
        self.modules
            .borrow()
            .contains_key(&canonicalize(id, &self.config))
    }

    /// All bound identifiers, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.modules.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of bound modules
    pub fn len(&self) -> usize {
        self.modules.borrow().len()
    }

    /// Check if nothing has been provided yet
    pub fn is_empty(&self) -> bool {
        self.modules.borrow().is_empty()
    }
}
