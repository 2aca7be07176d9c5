//! CLI entry point for treefind

use std::path::PathBuf;
use std::process;

use clap::Parser;
use treefind::find::{DEFAULT_DIRECTORY, DEFAULT_EXCLUSIONS, DEFAULT_OUTPUT};
use treefind::logging::init_tracing;
use treefind::{Error, ExclusionSet, Finder, FinderConfig};

#[derive(Parser, Debug)]
#[command(name = "treefind")]
#[command(about = "Traverse a directory and search for a keyword in filenames")]
#[command(version)]
struct Args {
    /// Keyword to search for in filenames (case-insensitive)
    keyword: String,

    /// Root directory to start from
    #[arg(long, default_value = DEFAULT_DIRECTORY)]
    directory: PathBuf,

    /// Directories to exclude from traversal (a directory is skipped if its
    /// name contains any of these)
    #[arg(long, num_args = 0.., default_values = DEFAULT_EXCLUSIONS)]
    exclude: Vec<String>,

    /// File the results are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl From<Args> for FinderConfig {
    fn from(args: Args) -> Self {
        Self {
            root: args.directory,
            keyword: args.keyword,
            exclusions: ExclusionSet::new(args.exclude),
            output: args.output,
        }
    }
}

fn main() {
    init_tracing();

    let finder = Finder::new(Args::parse().into());

    match finder.run_to_file() {
        Ok(_) => println!(
            "Search results saved to {}",
            finder.config().output.display()
        ),
        // A missing root is reported but is not a failed run.
        Err(e @ Error::RootNotFound(_)) => eprintln!("treefind: error: {}", e),
        Err(e) => {
            eprintln!("treefind: error: {}", e);
            process::exit(1);
        }
    }
}
