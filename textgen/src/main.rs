use std::sync::LazyLock;

use clap::Parser as _;
use cli::Cli;
use color_eyre::{eyre::Context as _, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

pub static ARGS: LazyLock<Cli> = LazyLock::new(Cli::parse);

fn main() -> Result<()> {
    color_eyre::install()?;
    install_logging(ARGS.verbose);

    let text = match ARGS.text {
        Some(ref text) => std::fs::read(text).wrap_err("text file does not exist")?,
        None => {
            use std::io::{stdin, Read};

            let mut text = Vec::new();
            stdin()
                .read_to_end(&mut text)
                .wrap_err("failed to read from stdin")?;

            text
        }
    };

    let code = textgen::encode(&text);
    debug!(text = text.len(), code = code.len(), "generated program");

    match ARGS.output {
        Some(ref output) => {
            std::fs::write(output, code).wrap_err("failed to write to output file")?
        }
        None => println!("{code}"),
    }

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
