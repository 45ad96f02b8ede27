use clap::error::ErrorKind;
use clap::Parser;
use fasta_validator::{validate_with, OverlongLines, ValidationStatus, ValidatorBuilder};
use std::path::PathBuf;
use std::process::ExitCode;

fn exit_codes_help() -> String {
    let mut text = String::from("Exit codes:\n");
    for status in ValidationStatus::all() {
        text.push_str(&format!("  {:>3}: {}\n", status.code(), status.description()));
    }
    text
}

/// Check and validate a fasta file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = exit_codes_help())]
struct Cli {
    /// Print the reason a file is invalid to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Longest line, in bytes, read in one piece
    #[arg(long, value_name = "BYTES", default_value_t = fasta_validator::config::DEFAULT_MAX_LINE_LEN)]
    max_line_length: usize,

    /// Fail with exit code 16 on lines longer than --max-line-length
    #[arg(long)]
    reject_long_lines: bool,

    /// FASTA file, gzip-compressed when the name ends in .gz
    fasta: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprint!("{}", e);
                // Exit code 2 is reserved for duplicate identifiers.
                return ExitCode::from(ValidationStatus::MissingHeader.code());
            }
        },
    };

    let overlong = if cli.reject_long_lines {
        OverlongLines::Reject
    } else {
        OverlongLines::Continue
    };
    let config = ValidatorBuilder::new()
        .verbose(cli.verbose)
        .max_line_len(cli.max_line_length)
        .overlong(overlong)
        .build();

    validate_with(&cli.fasta, &config).into()
}
