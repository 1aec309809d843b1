//! Media export CLI.

use clap::Parser;
use media_export_cli::cli::{Cli, Command};
use media_export_cli::commands::{run_categories, run_export_command};
use media_export_cli::logging::{init_logging, log_config_from_cli};
use media_export_cli::summary::render_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Export(args) => match run_export_command(&args) {
            Ok(result) => {
                // Keep stdout clean when it carries the CSV itself.
                if args.stdout {
                    eprint!("{}", render_summary(&result));
                } else {
                    print!("{}", render_summary(&result));
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Categories(args) => match run_categories(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}
