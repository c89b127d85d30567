use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use treegen::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let files = cli.render().context("failed to generate sources")?;

    if cli.dry_run {
        for file in &files {
            println!("// {}", file.file_name);
            print!("{}", file.contents);
        }
        return Ok(());
    }

    let paths = cli.write(&files).context("failed to write generated sources")?;
    tracing::info!("Generated {} file(s) in {}", paths.len(), cli.output_dir.display());
    Ok(())
}
