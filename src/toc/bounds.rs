use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::TocError;

lazy_static! {
    /// The word "contents" alone on a line, with optional trailing
    /// punctuation or decoration.
    static ref MARKER_REGEX: Regex = Regex::new(r"(?i)^contents[^0-9a-zA-Z]*$").unwrap();

    /// A line opening a new section: any run of `#` followed by a space.
    static ref HEADING_START_REGEX: Regex = Regex::new(r"^#+ ").unwrap();

    /// A horizontal rule, which also ends the TOC region.
    static ref RULE_REGEX: Regex = Regex::new(r"^ *(?:-{3,}|\*{3,}|_{3,}) *$").unwrap();

    /// A line that looks like an existing TOC entry: an optionally indented
    /// bulleted link, or a flush-left bracketed link.
    static ref ENTRY_REGEX: Regex = Regex::new(r"^(?: *\* )?\[[^\]]*\]\([^)]*\) *$").unwrap();
}

/// Bounds of the TOC listing, excluding the contents marker itself:
/// `start` is inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocBounds {
    pub start: usize,
    pub end: usize,
}

/// Locate the existing TOC entry region within the document.
///
/// The region begins at the first non-blank line after the contents marker.
/// The end scan runs until the next section opener (heading or horizontal
/// rule); blank lines never stop it. The region closes one past the last
/// line that still looks like an entry, so blank separators between entry
/// groups do not truncate it.
pub fn locate_toc_bounds(lines: &[String]) -> Result<TocBounds, TocError> {
    // find the contents marker
    let marker = lines
        .iter()
        .position(|line| MARKER_REGEX.is_match(line.trim()))
        .ok_or(TocError::MarkerNotFound)?;

    // find the start of the existing toc entries
    let start = lines
        .iter()
        .enumerate()
        .skip(marker + 1)
        .find(|(_, line)| !line.trim().is_empty())
        .map(|(i, _)| i)
        .ok_or(TocError::NoTocStart)?;

    // find the end of the existing toc entries
    let mut end = start + 1;
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        let line = line.trim_end();
        if HEADING_START_REGEX.is_match(line) || RULE_REGEX.is_match(line) {
            return Ok(TocBounds { start, end });
        }
        if ENTRY_REGEX.is_match(line) {
            end = i + 1;
        }
    }

    Err(TocError::NoTocEnd)
}
