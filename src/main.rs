use anyhow::Result;
use clap::Parser;

use bump_check::cli::orchestration::{run_check_workflow, CheckWorkflowArgs};
use bump_check::sink::FileSink;
use bump_check::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "bump-check",
    about = "Validate semantic version bumps in release pipelines"
)]
struct Args {
    #[arg(help = "Previously released version (e.g. v1.2.3)")]
    previous: Option<String>,

    #[arg(help = "Proposed next version (e.g. v1.3.0)")]
    next: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "Write the result to this file instead of the configured environment sink"
    )]
    output: Option<String>,

    #[arg(long, help = "Validate and report without writing the result")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("bump-check {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let (previous, next) = match (args.previous, args.next) {
        (Some(previous), Some(next)) => (previous, next),
        _ => {
            ui::display_error("Two version arguments are required: <previous> <next>");
            std::process::exit(1);
        }
    };

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Select the result sink: an explicit path wins over the environment variable
    let sink = match args.output {
        Some(path) => FileSink::at_path(path),
        None => FileSink::from_env(&config.output.env_var),
    };

    let workflow_args = CheckWorkflowArgs {
        previous,
        next,
        dry_run: args.dry_run,
    };

    match run_check_workflow(&workflow_args, &config, &sink) {
        Ok(outcome) => {
            println!(
                "\n\x1b[32m✓\x1b[0m Valid {} bump from {} to {}\n",
                outcome.bump, workflow_args.previous, workflow_args.next
            );
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
