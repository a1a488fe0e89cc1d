use anyhow::Result;
use clap::Parser;
use foliorename_core::{OutputFormatter, VersionResult};
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod plan;
mod run;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    let result = match cli.command {
        Commands::Plan {
            directory,
            rules,
            preview,
            fixed_table_width,
            output,
        } => plan::handle_plan(
            &directory,
            &rules,
            preview,
            fixed_table_width,
            output,
            use_color,
        ),

        Commands::Run {
            directory,
            rules,
            dry_run,
            log_file,
            preview,
            fixed_table_width,
            output,
        } => run::handle_run(
            &directory,
            &rules,
            dry_run,
            log_file,
            preview,
            fixed_table_width,
            output,
            use_color,
            cli.yes,
        ),

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    }
}

fn handle_version(output: cli::OutputFormat) -> Result<i32> {
    let result = VersionResult {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    println!("{}", result.format(output.into()));
    Ok(0)
}
