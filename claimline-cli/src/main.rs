//! claimline binary entry point

use clap::Parser;
use claimline_cli::commands::{Commands, ListCommands};
use claimline_core::MarkupStyle;

/// Claim-by-claim redline comparison of two document versions
#[derive(Debug, Parser)]
#[command(name = "claimline", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                ListCommands::Styles => {
                    for style in MarkupStyle::ALL {
                        println!("{style}");
                    }
                }
                ListCommands::Formats => {
                    println!("text");
                    println!("json");
                    println!("markdown");
                }
            }
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
