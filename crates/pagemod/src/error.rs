// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the module emulation layer

use thiserror::Error;

/// Result type for module operations
pub type Result<T> = std::result::Result<T, ModuleError>;

/// Errors raised by the path resolver, the registry and the host glue
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Caller broke an arity or ordering contract
    #[error("usage error: {0}")]
    Usage(String),

    /// Two different definitions were provided for one module
    #[error("Provide failed, module \"{module}\" already registered with different definition")]
    RegistrationConflict {
        /// Canonical module identifier
        module: String,
    },

    /// Module not found
    #[error("Require failed, module \"{0}\" not defined")]
    ModuleNotFound(String),

    /// The emulation was installed twice into one host
    #[error("module emulation already installed in this host")]
    DoubleInstallation,

    /// Configuration parsing error
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// File system error while reading configuration
    #[error("file system error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModuleError {
    /// Create a new usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Create a module not found error
    pub fn module_not_found(module: impl Into<String>) -> Self {
        Self::ModuleNotFound(module.into())
    }

    /// Create a registration conflict error
    pub fn conflict(module: impl Into<String>) -> Self {
        Self::RegistrationConflict {
            module: module.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_module() {
        let err = ModuleError::module_not_found("widgets/list");
        assert_eq!(err.to_string(), "Require failed, module \"widgets/list\" not defined");

        let err = ModuleError::conflict("widgets");
        assert!(err.to_string().contains("\"widgets\""));
    }
}
