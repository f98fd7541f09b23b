use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Resolve font names from catalog names, font files, and collections.
#[derive(Debug, Parser)]
#[command(name = "fontnames", about, version)]
pub struct Cli {
    /// Log resolution steps to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve font specifiers: catalog names, font paths, or 'file.ttc,<index>'
    Name {
        /// Font specifiers to resolve
        #[arg(value_name = "SPEC", required = true)]
        specifiers: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Read a file and resolve it as a raw font program or metrics file
    File {
        /// Path to the font or metrics file
        #[arg(value_name = "PATH")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for resolved names.
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_name_subcommand_with_specifiers() {
        let cli = Cli::parse_from(["fontnames", "name", "Helvetica", "Arial.ttc,1"]);
        match cli.command {
            Commands::Name {
                ref specifiers,
                ref format,
            } => {
                assert_eq!(specifiers, &["Helvetica", "Arial.ttc,1"]);
                assert_eq!(format, &OutputFormat::Text);
            }
            _ => panic!("expected Name subcommand"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_file_subcommand_with_json() {
        let cli = Cli::parse_from(["fontnames", "file", "font.otf", "--format", "json"]);
        match cli.command {
            Commands::File {
                ref file,
                ref format,
            } => {
                assert_eq!(file, &PathBuf::from("font.otf"));
                assert_eq!(format, &OutputFormat::Json);
            }
            _ => panic!("expected File subcommand"),
        }
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::parse_from(["fontnames", "name", "Symbol", "--verbose"]);
        assert!(cli.verbose);
        let cli = Cli::parse_from(["fontnames", "-v", "file", "a.pfm"]);
        assert!(cli.verbose);
    }

    #[test]
    fn name_requires_a_specifier() {
        assert!(Cli::try_parse_from(["fontnames", "name"]).is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["fontnames", "name", "Symbol", "--format", "csv"]).is_err());
    }
}
