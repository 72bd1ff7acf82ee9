use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Tree Printer - draw trees as box-drawing diagrams
#[derive(Parser, Debug)]
#[command(name = "tree-printer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a directory as a tree
    Render(RenderArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Generate a man page
    Man,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Flags left unset fall back to the configuration file.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Directory to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Maximum depth to display
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Include hidden files
    #[arg(short, long)]
    pub all: bool,

    /// Follow symbolic links
    #[arg(short = 'L', long = "follow")]
    pub follow_symlinks: bool,

    /// Sort by: name, size, none
    #[arg(long, value_name = "BY")]
    pub sort: Option<String>,

    /// List directories before files
    #[arg(long)]
    pub dirs_first: bool,

    /// Show the size of every entry
    #[arg(short, long)]
    pub size: bool,

    /// Append '/' to directory names
    #[arg(short = 'F', long)]
    pub classify: bool,

    /// Scan directories in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Omit the directory and file count
    #[arg(long)]
    pub no_report: bool,
}
