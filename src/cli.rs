// src/cli.rs
use clap::Parser;

use crate::version::VERSION;

/// Command line surface. There are no options beyond clap's `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "uv-demo",
    version = VERSION,
    about = "Prints a greeting together with the package version"
)]
pub struct Args {}
