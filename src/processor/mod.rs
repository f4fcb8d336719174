use std::path::Path;

use log::{debug, info, warn};

use crate::config::Config;
use crate::toc;
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Transform a single document, reading from `source` and writing the
/// result to `dest`. The destination is only opened after the transform
/// succeeds, so a skipped document never touches it.
pub fn process_file(source: &Path, dest: &Path, config: &Config) -> BoxResult<()> {
    let lines = fs::read_lines(source)?;
    let result = toc::populate_toc(&lines, config.top, config.parts)?;
    fs::write_lines(dest, &result)?;
    Ok(())
}

/// Process every input document strictly sequentially.
///
/// A document that cannot be processed (no contents marker, unreadable file)
/// is reported and skipped; it never aborts the rest of the batch. Without an
/// explicit output path each source is rewritten in place.
pub fn process_batch(config: &Config) {
    let mut processed = 0;
    let mut skipped = 0;

    for file in &config.files {
        let dest = config.output.as_deref().unwrap_or(file.as_path());

        match process_file(file, dest, config) {
            Ok(()) => {
                processed += 1;
                info!("{} - processing", file.display());
                debug!("{} - written to {}", file.display(), dest.display());
            }
            Err(e) => {
                skipped += 1;
                warn!("{} - skipping: {}", file.display(), e);
            }
        }
    }

    if skipped > 0 {
        warn!(
            "Completed with {} documents processed and {} skipped",
            processed, skipped
        );
    } else {
        info!("Completed with {} documents processed", processed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlagSetting;
    use std::fs as stdfs;
    use std::path::PathBuf;

    const DOC: &str = "Contents\n\n* [stale](#stale)\n\n# Fresh\n\n## Start\n";
    const EXPECTED: &str = "Contents\n\n* [Fresh](#fresh)\n  * [Start](#start)\n\n# Fresh\n\n## Start\n";

    fn config(files: Vec<PathBuf>, output: Option<PathBuf>) -> Config {
        Config {
            files,
            top: FlagSetting::Infer,
            parts: FlagSetting::Infer,
            output,
        }
    }

    #[test]
    fn test_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        stdfs::write(&path, DOC).unwrap();

        let cfg = config(vec![path.clone()], None);
        process_file(&path, &path, &cfg).unwrap();

        assert_eq!(stdfs::read_to_string(&path).unwrap(), EXPECTED);
    }

    #[test]
    fn test_writes_to_a_separate_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("doc.md");
        let dest = dir.path().join("out.md");
        stdfs::write(&source, DOC).unwrap();

        let cfg = config(vec![source.clone()], Some(dest.clone()));
        process_file(&source, &dest, &cfg).unwrap();

        // source untouched, destination transformed
        assert_eq!(stdfs::read_to_string(&source).unwrap(), DOC);
        assert_eq!(stdfs::read_to_string(&dest).unwrap(), EXPECTED);
    }

    #[test]
    fn test_skipped_document_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("no-marker.md");
        let dest = dir.path().join("out.md");
        stdfs::write(&source, "# Just a Heading\n\ntext\n").unwrap();

        let cfg = config(vec![source.clone()], Some(dest.clone()));
        assert!(process_file(&source, &dest, &cfg).is_err());

        assert_eq!(stdfs::read_to_string(&source).unwrap(), "# Just a Heading\n\ntext\n");
        assert!(!dest.exists());
    }

    #[test]
    fn test_batch_continues_past_a_failing_document() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.md");
        let good = dir.path().join("good.md");
        stdfs::write(&bad, "no marker here\n").unwrap();
        stdfs::write(&good, DOC).unwrap();

        let cfg = config(vec![bad.clone(), good.clone()], None);
        process_batch(&cfg);

        assert_eq!(stdfs::read_to_string(&bad).unwrap(), "no marker here\n");
        assert_eq!(stdfs::read_to_string(&good).unwrap(), EXPECTED);
    }
}
