#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for parsing and comparing USPS addresses.
//!
//! ```text
//! usps_address_cli parse "123 N. Main St." "Springfield IL 12345" [--json]
//! usps_address_cli batch [--input addresses.csv] [--json]
//! usps_address_cli compare <D1> <L1> <D2> <L2>
//! usps_address_cli state "New York"
//! ```
//!
//! `--tables FILE` extends the built-in reference tables from a TOML file.
//! Set `RUST_LOG=debug` to see how each address was classified.

mod batch;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use usps_address::{Address, AddressParser, ReferenceTables, UspsTables};

#[derive(Parser)]
#[command(
    name = "usps_address_cli",
    about = "Parse, normalize, and compare USPS addresses"
)]
struct Cli {
    /// TOML file with extra reference table entries
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one address and print its canonical form
    Parse {
        /// Delivery address line (e.g. "123 N MAIN ST APT 4")
        delivery_address: String,
        /// City, state, and ZIP code (e.g. "SPRINGFIELD IL 12345")
        last_line: String,
        /// Print the parsed address as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse CSV records with `delivery_address,last_line` headers
    Batch {
        /// CSV file to read (defaults to stdin)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Report whether two addresses are the same
    Compare {
        /// First delivery address line
        first_delivery_address: String,
        /// First last line
        first_last_line: String,
        /// Second delivery address line
        second_delivery_address: String,
        /// Second last line
        second_last_line: String,
    },
    /// Look up the 2-letter code for a state name
    State {
        /// Full state name (e.g. "New York")
        name: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let extended;
    let tables = match &cli.tables {
        Some(path) => {
            extended = UspsTables::builtin_with_file(path)?;
            &extended
        }
        None => UspsTables::standard(),
    };
    let parser = AddressParser::new(tables);

    match cli.command {
        Commands::Parse {
            delivery_address,
            last_line,
            json,
        } => {
            let address = parse_or_exit(&parser, &delivery_address, &last_line);
            if json {
                println!("{}", serde_json::to_string_pretty(&address)?);
            } else {
                println!("{address}");
            }
        }
        Commands::Batch { input, json } => {
            let mut stdout = io::stdout().lock();
            let summary = match input {
                Some(path) => {
                    let file = BufReader::new(File::open(&path)?);
                    batch::run(&parser, file, &mut stdout, json)?
                }
                None => batch::run(&parser, io::stdin().lock(), &mut stdout, json)?,
            };
            if summary.failed > 0 {
                eprintln!("{} of {} record(s) failed", summary.failed, summary.parsed + summary.failed);
                std::process::exit(1);
            }
        }
        Commands::Compare {
            first_delivery_address,
            first_last_line,
            second_delivery_address,
            second_last_line,
        } => {
            let first = parse_or_exit(&parser, &first_delivery_address, &first_last_line);
            let second = parse_or_exit(&parser, &second_delivery_address, &second_last_line);
            if first == second {
                println!("Same address:\n{first}");
            } else {
                println!("Different addresses:\n{first}\n\n{second}");
            }
        }
        Commands::State { name } => match tables.state_name_to_code(&name) {
            Some(code) => println!("{code}"),
            None => {
                eprintln!("Unknown state: {name}");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn parse_or_exit(
    parser: &AddressParser<'_, UspsTables>,
    delivery_address: &str,
    last_line: &str,
) -> Address {
    match parser.parse(delivery_address, last_line) {
        Ok(address) => address,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_parse_subcommand() {
        let cli = Cli::try_parse_from([
            "usps_address_cli",
            "parse",
            "123 MAIN ST",
            "SPRINGFIELD IL 12345",
            "--json",
        ])
        .unwrap();
        assert!(cli.tables.is_none());
        assert!(matches!(
            cli.command,
            Commands::Parse { ref delivery_address, json: true, .. } if delivery_address == "123 MAIN ST"
        ));
    }

    #[test]
    fn tables_flag_is_global() {
        let cli = Cli::try_parse_from([
            "usps_address_cli",
            "state",
            "Ohio",
            "--tables",
            "extra.toml",
        ])
        .unwrap();
        assert_eq!(cli.tables, Some(PathBuf::from("extra.toml")));
        assert!(matches!(cli.command, Commands::State { ref name } if name == "Ohio"));
    }

    #[test]
    fn batch_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["usps_address_cli", "batch"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Batch {
                input: None,
                json: false
            }
        ));
    }

    #[test]
    fn compare_requires_four_lines() {
        assert!(
            Cli::try_parse_from(["usps_address_cli", "compare", "PO BOX 1", "A IL 12345"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from([
                "usps_address_cli",
                "compare",
                "PO BOX 1",
                "A IL 12345",
                "P.O. BOX 1",
                "A IL 12345",
            ])
            .is_ok()
        );
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["usps_address_cli"]).is_err());
    }
}
