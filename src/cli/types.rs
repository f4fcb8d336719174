use clap::Parser;
use std::path::PathBuf;

use crate::config::FlagSetting;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(about = "Table of contents populator for markdown files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Markdown file(s) to process
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Render top-level entries without bullets
    #[arg(long, value_enum, value_name = "MODE", default_value = "infer")]
    pub top: FlagSetting,

    /// Group chapter entries under "Part" headings
    #[arg(long, value_enum, value_name = "MODE", default_value = "infer")]
    pub parts: FlagSetting,

    /// Output file. Only valid with a single source file (default: replaces source files)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tri_state_flags_parse() {
        let cli = Cli::try_parse_from(["mdtoc", "doc.md", "--top", "on", "--parts", "off"]).unwrap();
        assert_eq!(cli.top, FlagSetting::On);
        assert_eq!(cli.parts, FlagSetting::Off);
        assert_eq!(cli.files, vec![PathBuf::from("doc.md")]);
    }

    #[test]
    fn test_flags_default_to_infer() {
        let cli = Cli::try_parse_from(["mdtoc", "doc.md"]).unwrap();
        assert_eq!(cli.top, FlagSetting::Infer);
        assert_eq!(cli.parts, FlagSetting::Infer);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_at_least_one_file_is_required() {
        assert!(Cli::try_parse_from(["mdtoc"]).is_err());
    }
}
