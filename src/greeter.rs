// src/greeter.rs
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::error::Result;
use crate::metadata::{BuildMetadata, MetadataRegistry};
use crate::version::PACKAGE_NAME;

/// First line of the greeting.
pub const GREETING: &str = "Hello from uv-demo!";

/// Renders the full output block for `version`, trailing newline included.
pub fn greeting(version: &str) -> String {
    format!("{GREETING}\nVersion: {version}\n")
}

/// Resolves this package's version from `registry` and writes the greeting to `out`.
///
/// The version is looked up before anything is written, so a failed lookup
/// leaves `out` untouched.
///
/// # Errors
/// - [`GreeterError::MetadataNotFound`](crate::GreeterError::MetadataNotFound)
///   when the registry does not know the package.
/// - [`GreeterError::Io`](crate::GreeterError::Io) when writing to `out` fails.
pub fn greet<R, W>(registry: &R, out: &mut W) -> Result<()>
where
    R: MetadataRegistry + ?Sized,
    W: Write + ?Sized,
{
    let version = registry.version(PACKAGE_NAME).inspect_err(|err| {
        warn!(package = PACKAGE_NAME, %err, "version lookup failed");
    })?;
    debug!(package = PACKAGE_NAME, %version, "resolved package version");

    out.write_all(greeting(&version).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Prints the greeting for the running package to standard output.
///
/// # Errors
/// See [`greet`].
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    greet(&BuildMetadata, &mut handle)
}
