mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .expect("failed to set Ctrl+C handler");

    let cli = Cli::parse();

    // Show pathscope info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("pathscope", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Route {
            from,
            to,
            alternatives,
            max_depth,
            max_paths,
            tie_break,
            format,
        } => commands::route::run(
            &commands::route::RouteOptions {
                from: from.as_deref(),
                to: to.as_deref(),
                alternatives: *alternatives,
                max_depth: *max_depth,
                max_paths: *max_paths,
                tie_break: *tie_break,
                format,
            },
            &cli.global,
        ),
        Command::Paths { from, to, limit } => {
            commands::paths::run(from.as_deref(), to.as_deref(), *limit, &cli.global)
        }
        Command::Info { from } => commands::info::run(from.as_deref(), &cli.global),
    }
}
