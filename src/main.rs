use std::process;

use clap::Parser;
use hurdat_timeline::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result: anyhow::Result<_> = runtime
        .block_on(commands::run(args))
        .map_err(anyhow::Error::from);

    match result {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print the chain to stderr and exit non-zero
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("HURDAT Timeline - Hurricane Track Breakpoint Locator");
    println!("====================================================");
    println!();
    println!("Resolve every observation of a hurricane season against a set of named");
    println!("coastal breakpoints and write a tab-separated timeline report.");
    println!();
    println!("USAGE:");
    println!("    hurdat-timeline <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process       Build the nearest-breakpoint timeline report (main command)");
    println!("    breakpoints   Inspect the breakpoint registry");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Build the 2018 NE Pacific timeline:");
    println!("    hurdat-timeline process --track hurdat2-nepac.txt \\");
    println!("                            --breakpoints breakpoints.csv --year 2018");
    println!();
    println!("    # List breakpoints matching a name:");
    println!("    hurdat-timeline breakpoints --breakpoints breakpoints.csv --name cabo");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hurdat-timeline <COMMAND> --help");
}
