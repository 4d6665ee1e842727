// Declare modules
pub mod cli;
pub mod config;
pub mod filter;
pub mod models;
pub mod text;
pub mod writer;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::fs::File;
use std::io::BufWriter;

use self::cli::Cli;
use self::config::FilterConfig;
use self::filter::Filter;
use self::writer::ContextWriter;

/// Initializes components and orchestrates the single walk.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Walk Root
    let root = match args.path {
        Some(path) => path,
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("Invalid root path: {}", root.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Root path is not a directory: {}", root.display());
    }

    // 3. Build Filter Configuration
    // Self-exclusion keeps the running binary out of its own artifact.
    let self_name = env::current_exe()
        .ok()
        .and_then(|exe| exe.file_name().map(|n| n.to_string_lossy().into_owned()));
    let output_name = args
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    let config = FilterConfig::with_defaults(self_name, output_name);

    // 4. Open Output Sink
    let out = File::create(&args.output)
        .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;

    // 5. Walk & Serialize
    let writer = ContextWriter::new(BufWriter::new(out), Filter::new(config));
    let result = writer
        .write_project(&root)
        .context("Failed to write project context")?;

    // 6. Report Summary
    println!("\nProject Context Generation Complete");
    println!("Output file: {}", args.output.display());
    println!("Files processed: {}", result.file_count);
    println!("Total lines: {}", result.total_lines);
    println!("Estimated tokens: {}", result.total_tokens);

    Ok(())
}
