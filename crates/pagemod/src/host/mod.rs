// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Page-global namespace and one-time installation
//!
//! Implements:
//! - `Host` - the global object scripts share
//! - `install` - publishes `define`, `require` and `provide` on it
//! - `register_external_libraries` - deprecated legacy glue

mod legacy;

pub use legacy::register_external_libraries;

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::config::Config;
use crate::error::{ModuleError, Result};
use crate::module_system::Registry;
use crate::path::PathModule;
use crate::value::Value;

/// Global set once the emulation is installed
pub const INSTALLED_FLAG: &str = "modules";

/// Globals the registry is published under
pub const ENTRY_POINTS: [&str; 3] = ["define", "require", "provide"];

/// The global namespace of a page
#[derive(Debug, Default)]
pub struct Host {
    globals: HashMap<String, Value>,
}

impl Host {
    /// Create an empty namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a global, returning the previous value
    pub fn set_global(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.globals.insert(name.into(), value)
    }

    /// Read a global
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    /// Read a global by dotted path (`THREE.Projector`).
    ///
    /// Each step but the last must be an object. Undefined counts as absent.
    pub fn lookup(&self, dotted: &str) -> Option<Value> {
        let mut segments = dotted.split('.');
        let mut current = self.globals.get(segments.next()?)?.clone();

        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }

        (!current.is_undefined()).then_some(current)
    }

    /// Whether module emulation has been installed here
    pub fn is_installed(&self) -> bool {
        self.global(INSTALLED_FLAG).is_some_and(Value::to_boolean)
    }

    /// The registry published by [`install`], if any
    pub fn registry(&self) -> Option<Rc<Registry>> {
        self.global("require")?.downcast::<Registry>()
    }
}

/// Install module emulation into `host`.
///
/// Fails with [`ModuleError::DoubleInstallation`] if the host already has it.
/// The `path` module is provided on the new registry.
pub fn install(host: &mut Host, config: Config) -> Result<Rc<Registry>> {
    if host.is_installed() {
        return Err(ModuleError::DoubleInstallation);
    }
    host.set_global(INSTALLED_FLAG, Value::Boolean(true));

    let registry = Rc::new(Registry::with_config(config));
    let handle: Rc<dyn std::any::Any> = registry.clone();
    for name in ENTRY_POINTS {
        host.set_global(name, Value::Native(Rc::clone(&handle)));
    }

    // Expose the path module replacement
    registry.provide("path", Value::native(PathModule))?;

    debug!("installed module emulation");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ObjectRef;

    #[test]
    fn test_install_publishes_entry_points() {
        let mut host = Host::new();
        let registry = install(&mut host, Config::default()).unwrap();

        assert!(host.is_installed());
        for name in ENTRY_POINTS {
            assert!(host.global(name).is_some(), "missing global {}", name);
        }
        assert!(Rc::ptr_eq(&host.registry().unwrap(), &registry));
    }

    #[test]
    fn test_double_installation() {
        let mut host = Host::new();
        install(&mut host, Config::default()).unwrap();
        let err = install(&mut host, Config::default()).unwrap_err();
        assert!(matches!(err, ModuleError::DoubleInstallation));
    }

    #[test]
    fn test_preexisting_flag_blocks_install() {
        let mut host = Host::new();
        host.set_global(INSTALLED_FLAG, Value::Boolean(true));
        assert!(install(&mut host, Config::default()).is_err());
        assert!(host.registry().is_none());
    }

    #[test]
    fn test_path_module_is_provided() {
        let mut host = Host::new();
        let registry = install(&mut host, Config::default()).unwrap();

        let path = registry.require("path").unwrap().downcast::<PathModule>().unwrap();
        assert_eq!(path.join(&["a", "b"]).unwrap(), "a/b");
    }

    #[test]
    fn test_lookup() {
        let mut host = Host::new();
        let three = ObjectRef::new();
        three.set("Projector", "projector");
        host.set_global("THREE", Value::Object(three));
        host.set_global("Missing", Value::Undefined);

        assert_eq!(host.lookup("THREE.Projector"), Some(Value::from("projector")));
        assert!(host.lookup("THREE").is_some());
        assert!(host.lookup("THREE.MTLLoader").is_none());
        assert!(host.lookup("THREEx.RendererStats").is_none());
        assert!(host.lookup("Missing").is_none());
    }
}
