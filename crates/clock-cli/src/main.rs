use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use clock_cli::{Config, Invocation, TimewCli, commands};

fn main() -> Result<()> {
    let argv = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let invocation = Invocation::from_args(argv);
    let (verbose, config_path) = match &invocation {
        Invocation::Parsed(cli) => (cli.verbose, cli.config.as_deref()),
        Invocation::Forward(_) => (false, None),
    };

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // stdout carries only the formatted result
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(config_path).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load configuration, using defaults");
        Config::default()
    });
    tracing::debug!(?config, "loaded configuration");

    let timew = TimewCli::new(config.timew_path);
    let output = commands::run(&invocation, &timew);
    print(&output)
}

/// Writes the result once. A closed pipe (`clock | head`) is not an error.
fn print(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
    {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("failed to write output"),
    }
}
