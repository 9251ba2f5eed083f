// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Synchronous CommonJS module emulation
//!
//! - `define(path, factory)` runs a factory and publishes its exports
//! - `provide(path, value)` publishes a value directly
//! - `require(id)` looks a module up, resolving `./` and `../` against the
//!   directory of the module being defined
//!
//! Modules must be defined before anything requires them. There is no
//! deferred resolution and no cycle handling.

mod canonical;
mod registry;
mod require;

pub use canonical::canonicalize;
pub use registry::Registry;
pub use require::{Module, Require};
