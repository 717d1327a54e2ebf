use std::sync::LazyLock;

use clap::Parser as _;
use cli::Cli;
use color_eyre::{eyre::Context as _, Result};
use parser::OptimizationOptions;
use tracing_subscriber::EnvFilter;

use interpreter::{Interpreter, TAPE_LENGTH};

mod cli;

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

    let options = if ARGS.no_optimize {
        OptimizationOptions::new()
    } else {
        OptimizationOptions::all()
    };

    let parser = parser::Parser::new(&source).with_options(options);
    let program = parser.parse().wrap_err("failed to parse")?;

    if ARGS.dump {
        program
            .dump(std::io::stdout().lock())
            .wrap_err("failed to write to stdout")?;

        return Ok(());
    }

    let mut interpreter = Interpreter::<TAPE_LENGTH>::new(program)
        .with_eof(ARGS.eof)
        .with_bounds(ARGS.bounds)
        .with_flush(ARGS.flush)
        .with_profile(ARGS.profile);
    let result = interpreter.run();

    if let Some(profile) = interpreter.profile() {
        eprintln!("{profile}");
    }

    result.wrap_err("failed to interpret")?;

    Ok(())
}

fn install_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
