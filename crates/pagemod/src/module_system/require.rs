// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The `require` function and `module` object handed to factories

use crate::error::Result;
use crate::module_system::registry::Registry;
use crate::value::{ObjectRef, Value};

/// The `require()` function for a factory
#[derive(Clone, Copy)]
pub struct Require<'r> {
    registry: &'r Registry,
}

impl<'r> Require<'r> {
    pub(crate) fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// require(id)
    pub fn load(&self, id: &str) -> Result<Value> {
        self.registry.require(id)
    }

    /// require.resolve(id) - the registry key without looking it up
    pub fn resolve(&self, id: &str) -> Result<String> {
        self.registry.resolve_id(id)
    }

    /// The registry behind this function, for nested define/provide
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }
}

/// The `module` object of a factory
#[derive(Debug)]
pub struct Module {
    /// Identifier passed to `define`
    pub id: String,
    /// Published value; starts out as the exports container
    pub exports: Value,
}

impl Module {
    pub(crate) fn new(id: &str, exports: &ObjectRef) -> Self {
        Self {
            id: id.to_string(),
            exports: Value::Object(exports.clone()),
        }
    }
}
