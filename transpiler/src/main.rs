use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use clap::{Parser as _, ValueEnum as _};
use cli::{Cli, Language};
use color_eyre::{eyre::Context as _, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use transpiler::{Backend, Java, Transpiler};

mod cli;
mod transpiler;

pub static ARGS: LazyLock<Cli> = LazyLock::new(Cli::parse);

fn main() -> Result<()> {
    color_eyre::install()?;
    install_logging(ARGS.verbose);

    let source = match ARGS.source {
        Some(ref source) => std::fs::read(source).wrap_err("source file does not exist")?,
        None => {
            use std::io::{stdin, Read};

            eprintln!("! Live mode. Press ^D to finish.");

            let mut source = Vec::new();
            stdin()
                .read_to_end(&mut source)
                .wrap_err("failed to read from stdin")?;

            source
        }
    };

    let parser = parser::Parser::new(&source);
    let program = parser.parse().wrap_err("failed to parse")?;

    let source = ARGS
        .source
        .clone()
        .unwrap_or_else(|| PathBuf::from("live.bf"));
    let transpiler = Transpiler::<30_000>::new(program);

    if ARGS.all {
        for &language in Language::value_variants() {
            let output = source.with_extension(language.extension());
            write(&transpiler, language, &output)?;
        }

        return Ok(());
    }

    let output = source.with_extension(ARGS.language.extension());
    let output = ARGS.output.as_ref().unwrap_or(&output);

    if output.as_os_str() == "-" {
        let text = transpiler.transpile(backend(ARGS.language, &source).as_ref());
        print!("{text}");
    } else {
        write(&transpiler, ARGS.language, output)?;
    }

    Ok(())
}

fn backend(language: Language, output: &Path) -> Box<dyn Backend> {
    match language {
        Language::C => Box::new(transpiler::C),
        Language::Rust => Box::new(transpiler::Rust),
        Language::Python => Box::new(transpiler::Python),
        Language::Java => {
            let stem = output.file_stem().unwrap_or_default().to_string_lossy();
            Box::new(Java::from_stem(&stem))
        }
    }
}

fn write(transpiler: &Transpiler<30_000>, language: Language, output: &Path) -> Result<()> {
    debug!(output = %output.display(), ?language, "writing translation");

    let text = transpiler.transpile(backend(language, output).as_ref());
    std::fs::write(output, text).wrap_err("failed to write to output file")
}

fn install_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
