use std::path::PathBuf;

use clap::ValueEnum;

use crate::utils::error::TocError;

/// Tri-state setting for a TOC style flag.
///
/// Each flag is either forced by the caller or inferred per document from the
/// existing TOC entries; the "unset" case is a named state, never a bare
/// nullable boolean threaded through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FlagSetting {
    /// Force the convention on for every document
    On,
    /// Force the convention off for every document
    Off,
    /// Infer the convention from each document's existing TOC
    Infer,
}

impl FlagSetting {
    /// The concrete override carried by this setting, if any.
    pub fn forced(self) -> Option<bool> {
        match self {
            FlagSetting::On => Some(true),
            FlagSetting::Off => Some(false),
            FlagSetting::Infer => None,
        }
    }
}

/// Invocation configuration assembled from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Markdown documents to process, in order
    pub files: Vec<PathBuf>,
    /// Top-level-without-bullet rendering
    pub top: FlagSetting,
    /// Parts-grouping rendering
    pub parts: FlagSetting,
    /// Explicit destination; `None` rewrites each source in place
    pub output: Option<PathBuf>,
}

/// Validate the invocation before any document is touched.
///
/// An explicit output path only makes sense when exactly one document is
/// supplied; rejecting the combination here keeps a misconfigured batch run
/// from clobbering anything.
pub fn validate_config(config: &Config) -> Result<(), TocError> {
    if config.output.is_some() && config.files.len() > 1 {
        return Err(TocError::MultipleFilesWithOutput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(files: &[&str], output: Option<&str>) -> Config {
        Config {
            files: files.iter().map(PathBuf::from).collect(),
            top: FlagSetting::Infer,
            parts: FlagSetting::Infer,
            output: output.map(PathBuf::from),
        }
    }

    #[test]
    fn test_output_with_single_file_is_valid() {
        assert!(validate_config(&config(&["a.md"], Some("out.md"))).is_ok());
    }

    #[test]
    fn test_output_with_multiple_files_is_fatal() {
        let result = validate_config(&config(&["a.md", "b.md"], Some("out.md")));
        assert!(matches!(result, Err(TocError::MultipleFilesWithOutput)));
    }

    #[test]
    fn test_multiple_files_without_output_are_valid() {
        assert!(validate_config(&config(&["a.md", "b.md"], None)).is_ok());
    }

    #[test]
    fn test_forced_values() {
        assert_eq!(FlagSetting::On.forced(), Some(true));
        assert_eq!(FlagSetting::Off.forced(), Some(false));
        assert_eq!(FlagSetting::Infer.forced(), None);
    }
}
