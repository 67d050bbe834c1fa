mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sgamargin",
    version,
    about = "SG&A margin calculator for financial statement PDFs"
)]
struct Cli {
    /// Log extraction details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the SG&A margin of one or more statements (PDF or extracted .txt)
    Analyze {
        /// Path(s) to PDF or plain-text files
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Fiscal year label: 2026E, 2025E, 2024A, 2023A or 2022A
        #[arg(short, long, default_value = "2026E")]
        year: String,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Text extraction backend: auto, pdftotext or pdf-extract
        #[arg(short, long, default_value = "auto")]
        backend: String,

        /// Run pdftotext without -layout
        #[arg(long)]
        no_layout: bool,

        /// Show the statement lines each value was read from
        #[arg(long)]
        show_lines: bool,
    },
    /// Print the text extracted from a PDF
    Extract {
        /// Path to PDF file
        input_file: PathBuf,

        /// Text extraction backend: auto, pdftotext or pdf-extract
        #[arg(short, long, default_value = "auto")]
        backend: String,

        /// Run pdftotext without -layout
        #[arg(long)]
        no_layout: bool,

        /// Write the text to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// List the selectable fiscal year labels
    Years,
}

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            input_files,
            year,
            output,
            backend,
            no_layout,
            show_lines,
        } => commands::analyze::run(
            input_files,
            &year,
            &output,
            &backend,
            !no_layout,
            show_lines,
        ),
        Commands::Extract {
            input_file,
            backend,
            no_layout,
            out,
        } => commands::extract::run(input_file, &backend, !no_layout, out),
        Commands::Years => commands::years::list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
