// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! `path` module emulation
//!
//! String algebra over forward-slash paths. Nothing here touches a
//! filesystem, and nothing anchors to an absolute root: `resolve` only
//! pushes and pops segments.

use crate::error::{ModuleError, Result};

/// path.sep - path segment separator
pub const SEP: &str = "/";

/// path.delimiter - path list delimiter
pub const DELIMITER: &str = ":";

const MAX_JOIN_SEGMENTS: usize = 3;

/// Split on either slash flavor, the way `basename` and `dirname` read paths.
fn split_any(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\'])
}

/// path.join(a, b?, c?)
///
/// Concatenates up to three segments, adding a separator only when the
/// accumulated path does not already end with one.
pub fn join(paths: &[&str]) -> Result<String> {
    let (first, rest) = match paths.split_first() {
        Some(split) => split,
        None => return Err(ModuleError::usage("path.join requires at least one path")),
    };
    if paths.len() > MAX_JOIN_SEGMENTS {
        return Err(ModuleError::usage(format!(
            "path.join supports only {} paths, got {}",
            MAX_JOIN_SEGMENTS,
            paths.len()
        )));
    }

    let mut joined = first.to_string();
    for segment in rest {
        if !joined.ends_with(SEP) {
            joined.push_str(SEP);
        }
        joined.push_str(segment);
    }
    Ok(joined)
}

/// path.normalize(path)
pub fn normalize(path: &str) -> String {
    let parts: Vec<&str> = path.split(SEP).collect();
    let last = parts.len() - 1;
    let mut kept: Vec<&str> = Vec::with_capacity(parts.len());

    for (i, part) in parts.iter().enumerate() {
        match *part {
            "." => {}
            // Leading and trailing empties carry the root and trailing slash
            "" if i > 0 && i < last => {}
            ".." => {
                kept.pop();
            }
            other => kept.push(other),
        }
    }

    kept.join(SEP)
}

/// path.basename(path, ext?)
pub fn basename(path: &str, ext: Option<&str>) -> String {
    let name = split_any(path).last().unwrap_or_default();

    match ext {
        Some(ext) => name.strip_suffix(ext).unwrap_or(name).to_string(),
        None => name.to_string(),
    }
}

/// path.dirname(path)
///
/// A single-component path has no directory and yields `""`, including
/// `/foo`.
pub fn dirname(path: &str) -> String {
    let mut dirs: Vec<&str> = split_any(path).collect();
    dirs.pop();
    dirs.join(SEP)
}

/// path.resolve(from, to)
///
/// Only the two-path form exists; any other arity is a usage error.
pub fn resolve(paths: &[&str]) -> Result<String> {
    match paths {
        [from, to] => Ok(resolve_from(from, to)),
        _ => Err(ModuleError::usage(format!(
            "path.resolve only supports two paths, got {}",
            paths.len()
        ))),
    }
}

/// Walk `to` on top of `from`: `.` is skipped, `..` pops, anything else pushes.
pub fn resolve_from(from: &str, to: &str) -> String {
    let mut components: Vec<&str> = from.split(SEP).collect();

    for dir in to.split(SEP) {
        match dir {
            "." => {}
            ".." => {
                components.pop();
            }
            other => components.push(other),
        }
    }

    components.join(SEP)
}

/// The resolver as a publishable module value.
///
/// Installed hosts provide this under the `path` identifier so factories can
/// `require("path")` and downcast it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathModule;

impl PathModule {
    /// Separator
    pub fn sep(&self) -> &'static str {
        SEP
    }

    /// Delimiter
    pub fn delimiter(&self) -> &'static str {
        DELIMITER
    }

    /// See [`join`]
    pub fn join(&self, paths: &[&str]) -> Result<String> {
        join(paths)
    }

    /// See [`normalize`]
    pub fn normalize(&self, path: &str) -> String {
        normalize(path)
    }

    /// See [`basename`]
    pub fn basename(&self, path: &str, ext: Option<&str>) -> String {
        basename(path, ext)
    }

    /// See [`dirname`]
    pub fn dirname(&self, path: &str) -> String {
        dirname(path)
    }

    /// See [`resolve`]
    pub fn resolve(&self, paths: &[&str]) -> Result<String> {
        resolve(paths)
    }
}
