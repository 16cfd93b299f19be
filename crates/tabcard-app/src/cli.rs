use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

/// Default number of tries at interactive column selection.
pub const DEFAULT_SELECTION_ATTEMPTS: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Parser)]
#[command(name = "tabcard")]
#[command(about = "Convert spreadsheet contacts into a vCard 3.0 file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Contact table to convert (.csv, .tsv, .xls, .xlsx or .ods; first row is the header)
    pub input: PathBuf,

    /// Where to write the vCard file [default: `output.path` setting]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file [default: ./tabcard.toml when present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Encode contacts in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Skip printing the first rows before interactive column selection
    #[arg(long)]
    pub no_preview: bool,

    /// How many times to offer interactive column selection before giving up
    #[arg(long, default_value_t = DEFAULT_SELECTION_ATTEMPTS)]
    pub attempts: NonZeroUsize,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "tabcard",
            "people.csv",
            "-o",
            "out.vcf",
            "--config",
            "custom.toml",
            "--parallel",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.input, PathBuf::from("people.csv"));
        assert_eq!(cli.output, Some(PathBuf::from("out.vcf")));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.parallel);
        assert!(!cli.no_preview);
        assert_eq!(cli.attempts, DEFAULT_SELECTION_ATTEMPTS);
    }

    #[test]
    fn parses_selection_options() {
        let cli = Cli::try_parse_from(["tabcard", "people.xlsx", "--no-preview", "--attempts", "5"])
            .expect("arguments should parse");

        assert!(cli.no_preview);
        assert_eq!(cli.attempts.get(), 5);
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(Cli::try_parse_from(["tabcard", "people.csv", "--attempts", "0"]).is_err());
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["tabcard"]).is_err());
    }
}
