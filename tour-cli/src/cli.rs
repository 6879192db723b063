//! CLI argument parsing using clap

use clap::Parser;

/// Tour of closures, iterators, decorators and memoization
#[derive(Parser, Debug)]
#[command(name = "lang-tour", about = "Run the language-feature demos", version)]
pub struct Args {
    /// Demos to run, by name (comma-separated; runs all if omitted)
    #[arg(short, long, value_delimiter = ',')]
    pub demo: Vec<String>,

    /// Tags to filter demos (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// List registered demos and exit
    #[arg(long)]
    pub list: bool,

    /// Print a header and timing for each demo, and a summary
    #[arg(short, long)]
    pub verbose: bool,
}
