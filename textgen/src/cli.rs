use std::path::PathBuf;

#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "Generates brainfuck that prints the given text.")]
pub struct Cli {
    #[arg(help = "Path to file with the text to print")]
    pub text: Option<PathBuf>,
    #[arg(short, long, help = "Path to output file, stdout when absent")]
    pub output: Option<PathBuf>,
    #[arg(short, long, help = "Log progress to stderr")]
    pub verbose: bool,
}
