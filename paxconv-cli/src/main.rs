use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use paxconv_cli::batch::{BatchOptions, DEFAULT_KANTEC_COLUMN, DEFAULT_PAXTON_COLUMN};
use paxconv_cli::commands;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "paxconv")]
#[command(about = "Paxconv - Convert Kantec card numbers to Paxton10 format", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single Kantec card number (e.g. "4D:52042")
    Convert {
        /// Kantec card number, hex facility code and decimal card number
        kantec: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert the Kantec column of a CSV file
    Batch {
        /// Input CSV file with a header row
        #[arg(short, long)]
        input: String,

        /// Output CSV file
        #[arg(short, long)]
        output: String,

        /// Column holding Kantec card numbers
        #[arg(long, default_value = DEFAULT_KANTEC_COLUMN)]
        kantec_column: String,

        /// Column to write Paxton10 card numbers to
        #[arg(long, default_value = DEFAULT_PAXTON_COLUMN)]
        paxton_column: String,

        /// Number of row errors listed in the summary
        #[arg(long, default_value = "10")]
        max_errors_shown: usize,
    },

    /// Check the converter against known card pairs
    Selftest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Some(Commands::Convert { kantec, json }) => {
            commands::convert::execute(&kantec, json).map(|_| ())
        }

        Some(Commands::Batch {
            input,
            output,
            kantec_column,
            paxton_column,
            max_errors_shown,
        }) => {
            let options = BatchOptions {
                kantec_column,
                paxton_column,
            };
            commands::batch::execute(&input, &output, &options, max_errors_shown)
                .map(|_| ())
        }

        Some(Commands::Selftest) => commands::selftest::execute().map(|_| ()),

        None => {
            Cli::command().print_help()?;
            println!();
            commands::selftest::execute().map(|_| ())
        }
    }
}
