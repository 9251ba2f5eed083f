// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # pagemod
//!
//! Node.js-style `define`/`require`/`module.exports` emulation for hosts that
//! have no module loader of their own, such as a plain page evaluating script
//! tags in order.
//!
//! This crate provides:
//!
//! - A `path` module replacement over forward-slash strings
//! - A synchronous module registry (`define`, `provide`, `require`)
//! - One-time installation into a host's global namespace
//! - Deprecated registration of script-tag libraries as modules
//!
//! ## Quick Start
//!
//! ```rust
//! use pagemod::{Config, Host, install};
//!
//! # fn main() -> pagemod::Result<()> {
//! let mut host = Host::new();
//! let registry = install(&mut host, Config::default())?;
//!
//! registry.define("app/greeting/index.js", |_require, exports, _module| {
//!     exports.set("text", "hello");
//!     Ok(())
//! })?;
//!
//! registry.define("app/main.js", |require, exports, _module| {
//!     let greeting = require.load("./greeting")?;
//!     exports.set("greeting", greeting);
//!     Ok(())
//! })?;
//!
//! let main = registry.require("main.js")?;
//! assert!(main.as_object().unwrap().has("greeting"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod host;
pub mod module_system;
pub mod path;
pub mod value;

// Re-exports
pub use config::{Config, LegacyLibrary};
pub use error::{ModuleError, Result};
pub use host::{Host, install, register_external_libraries};
pub use module_system::{Module, Registry, Require};
pub use value::{ObjectRef, Value};

/// Version of the pagemod runtime
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
