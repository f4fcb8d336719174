use std::fs;
use std::io::Write;
use std::path::Path;

use crate::utils::error::BoxResult;

/// Read a file into an ordered sequence of newline-terminated lines.
///
/// Terminators stay attached to their lines, so a document without a final
/// newline survives a rewrite unchanged.
pub fn read_lines<P: AsRef<Path>>(path: P) -> BoxResult<Vec<String>> {
    let contents = fs::read_to_string(path.as_ref())?;
    Ok(contents.split_inclusive('\n').map(str::to_string).collect())
}

/// Write a line sequence to a file, replacing any previous contents.
/// The file handle is dropped (and the file closed) before returning.
pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> BoxResult<()> {
    let mut file = fs::File::create(path.as_ref())?;
    for line in lines {
        file.write_all(line.as_bytes())?;
    }
    Ok(())
}
