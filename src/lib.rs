// src/lib.rs
pub mod cli;
pub mod error;
pub mod greeter;
pub mod logging;
pub mod metadata;
pub mod version;

pub use error::{GreeterError, Result};
pub use greeter::{GREETING, greet, greeting, run};
pub use metadata::{BuildMetadata, InMemoryRegistry, MetadataRegistry};
pub use version::{PACKAGE_NAME, VERSION};
