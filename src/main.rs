//! snipcheck CLI binary entry point.
//! Delegates to the library for review/fix/detect and prints results.

use clap::Parser;
use snipcheck::cli::{Cli, Commands};
use snipcheck::error::Result;
use snipcheck::input::{self, SAMPLE_SNIPPET};
use snipcheck::{config, detect, fix, lint, output, utils};
use std::io;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("snipcheck={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(cli.cmd) {
        eprintln!("{} {}", utils::error_prefix(), e);
        std::process::exit(2);
    }
}

fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Sample => {
            print!("{}", SAMPLE_SNIPPET);
        }
        Commands::Review {
            inputs,
            repo_root,
            output,
            language,
            sample,
        } => {
            let eff =
                config::resolve_effective(repo_root.as_deref(), output.as_deref(), language, None)?;
            let inputs = input::read_inputs(&inputs, sample, io::stdin().lock())?;
            let report = lint::run_review(&inputs, &eff.review_options());
            output::print_review(&report, &eff.output);
        }
        Commands::Fix {
            inputs,
            repo_root,
            output,
            language,
            write,
            diff,
            sample,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                language,
                if write { Some(true) } else { None },
            )?;
            // --diff previews only; it never writes, whatever the config says
            let eff_write = eff.write && !diff;
            let inputs = input::read_inputs(&inputs, sample, io::stdin().lock())?;
            let mut results = fix::run_fix(&inputs, eff.language);
            if eff_write {
                fix::write_results(&mut results)?;
                let wrote = results.iter().filter(|r| r.wrote).count();
                if eff.output != "json" && wrote > 0 {
                    eprintln!("{} wrote {} file(s)", utils::info_prefix(), wrote);
                }
            }
            output::print_fix(&results, &eff.output, eff_write, diff);
        }
        Commands::Detect { inputs, output } => {
            let inputs = input::read_inputs(&inputs, false, io::stdin().lock())?;
            let detected: Vec<_> = inputs
                .iter()
                .map(|i| (i.name.clone(), detect::detect_language(&i.text)))
                .collect();
            output::print_detect(&detected, output.as_deref().unwrap_or("human"));
        }
    }
    Ok(())
}
