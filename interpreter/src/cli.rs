use std::path::PathBuf;

use interpreter::{BoundsPolicy, EofBehavior};

#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "Runs brainfuck using optimizing interpreter.")]
pub struct Cli {
    #[arg(help = "Path to file with source code")]
    pub source: Option<PathBuf>,
    #[arg(
        value_enum,
        long,
        default_value = "minus-one",
        help = "Value stored by ',' at end of input"
    )]
    pub eof: EofBehavior,
    #[arg(
        value_enum,
        long,
        default_value = "wrap",
        help = "Behaviour when the pointer leaves the tape"
    )]
    pub bounds: BoundsPolicy,
    #[arg(short, long, help = "Flush stdout after each '.' instruction")]
    pub flush: bool,
    #[arg(long, help = "Disable idiom folding and run-length encoding")]
    pub no_optimize: bool,
    #[arg(long, help = "Print the generated instruction listing and exit")]
    pub dump: bool,
    #[arg(short, long, help = "Print executed instruction counts to stderr")]
    pub profile: bool,
    #[arg(short, long, help = "Log pipeline stages to stderr")]
    pub verbose: bool,
}
