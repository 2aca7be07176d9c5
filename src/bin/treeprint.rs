//! CLI entry point for treeprint

use std::path::PathBuf;
use std::process;

use clap::Parser;
use treefind::logging::init_tracing;
use treefind::tree::print_tree;
use treefind::{ExclusionSet, PrinterConfig};

#[derive(Parser, Debug)]
#[command(name = "treeprint")]
#[command(about = "Write an indented rendering of a directory tree to a file")]
#[command(version)]
struct Args {
    /// Root directory to print [default: .]
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Directory names to skip (exact match)
    /// [default: node_modules yarn.lock .git .svn .DS_Store]
    #[arg(long, num_args = 0..)]
    exclude: Option<Vec<String>>,

    /// File the rendering is written to [default: directory_structure.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the tree as JSON instead of indented text
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Fill every flag left unset from `PrinterConfig::default()`.
    fn into_config(self) -> PrinterConfig {
        let defaults = PrinterConfig::default();
        PrinterConfig {
            root: self.directory.unwrap_or(defaults.root),
            exclusions: self
                .exclude
                .map(ExclusionSet::new)
                .unwrap_or(defaults.exclusions),
            output: self.output.unwrap_or(defaults.output),
            json: self.json,
        }
    }
}

fn main() {
    init_tracing();

    let config = Args::parse().into_config();

    if let Err(e) = print_tree(&config) {
        eprintln!("treeprint: error: {}", e);
        process::exit(1);
    }

    println!("Directory structure saved to {}", config.output.display());
}
