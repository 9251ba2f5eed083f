// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Registration of third-party libraries loaded through plain script tags

use tracing::{trace, warn};

use crate::error::Result;
use crate::host::Host;
use crate::module_system::Registry;
use crate::value::{ObjectRef, Value};

/// Provide known library globals as modules so legacy code can require them.
///
/// Deprecated: pages should define their dependencies instead. Each library
/// from the registry's config is provided if its global (and the global it
/// depends on) is present on `host`. Stub modules are provided as fresh empty
/// objects, so calling this twice on one registry conflicts.
pub fn register_external_libraries(host: &Host, registry: &Registry) -> Result<()> {
    warn!("DEPRECATED, registering external libraries");

    let config = registry.config();
    for library in &config.legacy_libraries {
        let Some(value) = host.lookup(&library.global) else {
            trace!(global = %library.global, "library global not present");
            continue;
        };
        if let Some(required) = &library.requires {
            if host.lookup(required).is_none() {
                trace!(global = %library.global, requires = %required, "required global not present");
                continue;
            }
        }

        let definition = match &library.wrap_as {
            Some(key) => {
                let wrapper = ObjectRef::new();
                wrapper.set(key.as_str(), value);
                Value::Object(wrapper)
            }
            None => value,
        };
        registry.provide_with(&library.module, definition, library.override_duplicate)?;
    }

    // Required for side effects only; scripts already ran them
    for stub in &config.stub_modules {
        registry.provide(stub, Value::object())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LegacyLibrary};
    use crate::error::ModuleError;

    fn page_with_three() -> Host {
        let mut host = Host::new();
        let three = ObjectRef::new();
        three.set("Projector", Value::native("projector"));
        host.set_global("THREE", Value::Object(three));
        host.set_global("Stats", Value::native("stats"));
        host.set_global("$", Value::native("jquery"));
        host.set_global("Parse", Value::native("parse"));
        host
    }

    #[test]
    fn test_registers_present_globals() {
        let host = page_with_three();
        let registry = Registry::new();
        register_external_libraries(&host, &registry).unwrap();

        let jquery = registry.require("jquery").unwrap();
        assert_eq!(&jquery, host.global("$").unwrap());
        assert!(registry.contains("three"));
        assert!(registry.contains("THREE.Projector"));
        assert!(registry.contains("stats.js"));
        assert!(!registry.contains("stats"));
        assert!(!registry.contains("angular"));
        assert!(!registry.contains("THREE.MTLLoader"));
    }

    #[test]
    fn test_wraps_parse() {
        let host = page_with_three();
        let registry = Registry::new();
        register_external_libraries(&host, &registry).unwrap();

        let parse = registry.require("parse").unwrap();
        let inner = parse.as_object().unwrap().get("Parse").unwrap();
        assert_eq!(&inner, host.global("Parse").unwrap());
    }

    #[test]
    fn test_requires_dependency_global() {
        let mut host = Host::new();
        host.set_global("Stats", Value::native("stats"));
        let registry = Registry::new();
        register_external_libraries(&host, &registry).unwrap();
        assert!(!registry.contains("stats.js"));
    }

    #[test]
    fn test_stub_modules_are_empty_objects() {
        let registry = Registry::new();
        register_external_libraries(&Host::new(), &registry).unwrap();

        let bootstrap = registry.require("bootstrap").unwrap();
        assert!(bootstrap.as_object().unwrap().is_empty());
        assert_eq!(registry.len(), registry.config().stub_modules.len());
    }

    #[test]
    fn test_second_registration_conflicts_on_stubs() {
        let registry = Registry::new();
        register_external_libraries(&Host::new(), &registry).unwrap();
        let err = register_external_libraries(&Host::new(), &registry).unwrap_err();
        assert!(matches!(err, ModuleError::RegistrationConflict { .. }));
    }

    #[test]
    fn test_custom_library_list() {
        let config = Config {
            legacy_libraries: vec![LegacyLibrary::new("moment", "moment")],
            stub_modules: Vec::new(),
            ..Config::default()
        };
        let mut host = Host::new();
        host.set_global("moment", Value::native(0u8));
        let registry = Registry::with_config(config);

        register_external_libraries(&host, &registry).unwrap();
        assert_eq!(registry.keys(), vec!["moment".to_string()]);
    }
}
