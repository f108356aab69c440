use clap::{CommandFactory, Parser};
use dirprefix_core::{Config, OutputFormat};
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod fixture;
mod run;

use cli::{Cli, Commands, OutputFormatArg};

fn main() {
    let cli = Cli::parse();

    // Load config to get defaults
    let config = Config::load().unwrap_or_default();

    let use_color = if cli.no_color {
        false
    } else {
        config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal())
    };

    let result = match cli.command {
        Commands::Run {
            root,
            include_root_files,
            quiet,
            output,
        } => run::handle_run(
            root,
            include_root_files || config.defaults.include_root_files,
            quiet,
            resolve_output(output, &config),
            use_color,
        ),

        Commands::Fixture { target, output } => {
            fixture::handle_fixture(&target, resolve_output(output, &config))
        },

        Commands::Completions { shell } => {
            let mut cmd = <Cli as CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "dirprefix", &mut io::stdout());
            Ok(())
        },
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");

            // Determine exit code based on error type
            let exit_code = if e.to_string().contains("Not a directory") {
                2 // Invalid input
            } else {
                3 // Internal error
            };

            process::exit(exit_code);
        },
    }
}

fn resolve_output(arg: Option<OutputFormatArg>, config: &Config) -> OutputFormat {
    match arg {
        Some(arg) => arg.into(),
        None if config.defaults.output == "json" => OutputFormat::Json,
        None => OutputFormat::Summary,
    }
}
