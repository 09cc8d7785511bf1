// src/metadata.rs
//! Package metadata lookup.
//!
//! A [`MetadataRegistry`] maps a package name to its version string. The
//! greeter only ever asks one question of it, so the trait stays that small.

use std::collections::HashMap;

use crate::error::{GreeterError, Result};
use crate::version::{PACKAGE_NAME, VERSION};

/// Source of package version strings, queried by package name.
pub trait MetadataRegistry: Send + Sync {
    /// Returns the version registered for `package`.
    ///
    /// # Errors
    /// Returns [`GreeterError::MetadataNotFound`] when `package` is unknown.
    fn version(&self, package: &str) -> Result<String>;
}

/// Registry backed by the metadata Cargo compiled into this binary.
///
/// It knows exactly one package: this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildMetadata;

impl MetadataRegistry for BuildMetadata {
    fn version(&self, package: &str) -> Result<String> {
        if package == PACKAGE_NAME {
            Ok(VERSION.to_string())
        } else {
            Err(GreeterError::metadata_not_found(package))
        }
    }
}

/// Explicit name -> version table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    entries: HashMap<String, String>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>, version: impl Into<String>) -> Self {
        self.register(package, version);
        self
    }

    /// Records `version` for `package`, replacing any earlier entry.
    pub fn register(&mut self, package: impl Into<String>, version: impl Into<String>) {
        self.entries.insert(package.into(), version.into());
    }
}

impl MetadataRegistry for InMemoryRegistry {
    fn version(&self, package: &str) -> Result<String> {
        self.entries
            .get(package)
            .cloned()
            .ok_or_else(|| GreeterError::metadata_not_found(package))
    }
}
