// src/version.rs
//! Package identity baked in at build time.
//!
//! Both constants come from Cargo, so they always match `Cargo.toml`.

/// Name under which the package is registered.
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// Package version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
