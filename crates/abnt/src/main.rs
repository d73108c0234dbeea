use abnt_core::ReferenceRecord;
use abnt_processor::{compose, export_plain, format, io::load_records, Html, PlainText};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format the references and citations in a records file
    Format {
        /// Path to the records file (YAML/JSON, single record or a list)
        #[arg(index = 1)]
        records: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export a records file as a numbered plain-text document
    Export {
        /// Path to the records file (YAML/JSON)
        records: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "referencias_abnt.txt")]
        output: PathBuf,
    },
    /// Validate a records file
    Validate {
        /// Path to the records file (YAML/JSON)
        path: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Plain,
    Html,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Plain => write!(f, "plain"),
            Format::Html => write!(f, "html"),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            records,
            format: output_format,
            json,
        } => {
            let records: Vec<ReferenceRecord> = match load_records(&records) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            let results: Vec<_> = records
                .iter()
                .map(|record| match output_format {
                    Format::Plain => format(record, &PlainText),
                    Format::Html => format(record, &Html),
                })
                .collect();

            if json {
                match serde_json::to_string_pretty(&results) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Error serializing output: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                for (record, result) in records.iter().zip(&results) {
                    println!("[{}]", record.r#type);
                    println!("{}", result.reference);
                    println!("Citação: {}", result.citation);
                    println!();
                }
            }
        }
        Commands::Export { records, output } => {
            let records = match load_records(&records) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            let entries: Vec<_> = records.iter().map(compose).collect();
            let document = export_plain(&entries);

            if let Err(e) = fs::write(&output, document) {
                eprintln!("Error writing {}: {}", output.display(), e);
                std::process::exit(1);
            }
            println!("Wrote {} references to {}", entries.len(), output.display());
        }
        Commands::Validate { path } => match load_records(&path) {
            Ok(records) => println!("{} record(s) parsed.", records.len()),
            Err(e) => {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
        },
    }
}
