use std::path::PathBuf;

#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "Translates brainfuck into C, Rust, Python or Java source.")]
pub struct Cli {
    #[arg(help = "Path to file with source code")]
    pub source: Option<PathBuf>,
    #[arg(short, long, help = "Path to output file, '-' for stdout")]
    pub output: Option<PathBuf>,
    #[arg(value_enum, short, long, default_value = "c")]
    pub language: Language,
    #[arg(
        short,
        long,
        conflicts_with_all = ["output", "language"],
        help = "Write every language next to the source file"
    )]
    pub all: bool,
    #[arg(short, long, help = "Log pipeline stages to stderr")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Language {
    #[default]
    #[value(help = "Emit C source")]
    C,
    #[value(help = "Emit Rust source")]
    Rust,
    #[value(help = "Emit Python 3 source")]
    Python,
    #[value(help = "Emit a Java class named after the output file")]
    Java,
}

impl Language {
    pub fn extension(&self) -> &str {
        use Language::*;

        match self {
            C => "c",
            Rust => "rs",
            Python => "py",
            Java => "java",
        }
    }
}
