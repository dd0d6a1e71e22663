mod cli;
mod logging;

use crate::cli::{DecodeTarget, EncodeTarget, Kind};
use crate::logging::{LogMode, init_logging};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pathpiece",
    version,
    about = "pathpiece: inspect how values encode to and decode from URL and header text"
)]
struct Cli {
    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode text into a typed value and print it
    Decode {
        #[arg(long, value_enum)]
        kind: Kind,

        #[arg(long, value_enum, default_value_t = DecodeTarget::Path)]
        target: DecodeTarget,

        /// Report malformed values as absent instead of failing
        #[arg(long)]
        lenient: bool,

        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Decode each value as a path piece, then print it re-encoded for a target
    Encode {
        #[arg(long, value_enum)]
        kind: Kind,

        #[arg(long, value_enum, default_value_t = EncodeTarget::Path)]
        target: EncodeTarget,

        #[arg(required = true)]
        values: Vec<String>,
    },

    /// List the supported kinds
    Kinds,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(logging::default_log_mode));

    let result = match cli.command {
        Command::Decode {
            kind,
            target,
            lenient,
            values,
        } => cli::decode::run(kind, target, lenient, &values),

        Command::Encode {
            kind,
            target,
            values,
        } => cli::encode::run(kind, target, &values),

        Command::Kinds => {
            cli::print_kinds();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("pathpiece error: {e}");
        std::process::exit(1);
    }
}
