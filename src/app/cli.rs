use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Aggregate a project tree into a single LLM context file"
)]
pub struct Cli {
    /// Directory to walk (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// File the aggregated context is written to
    #[arg(short, long, default_value = "project-context.txt")]
    pub output: PathBuf,
}
