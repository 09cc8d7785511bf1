// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use uv_demo::cli::Args;

fn main() -> Result<()> {
    let _args = Args::parse();
    uv_demo::logging::init();

    uv_demo::run().context("failed to print greeting")?;
    Ok(())
}
