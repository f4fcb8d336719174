pub mod anchor;
pub mod bounds;
pub mod entries;
pub mod style;

pub use bounds::{locate_toc_bounds, TocBounds};
pub use style::{resolve_style, TocStyle};

use crate::config::FlagSetting;
use crate::utils::error::TocError;

/// Rebuild the TOC listing beneath the document's contents marker.
///
/// Pure function over the document's line sequence: locates the existing TOC
/// region, resolves the rendering style from overrides and the region's
/// entries, regenerates the listing from the body headings, and splices the
/// result back together. Boundary-location failures abort the whole
/// transformation for this document; nothing is partially rewritten.
pub fn populate_toc(
    lines: &[String],
    top: FlagSetting,
    parts: FlagSetting,
) -> Result<Vec<String>, TocError> {
    let toc_bounds = locate_toc_bounds(lines)?;
    let toc_style = resolve_style(&lines[toc_bounds.start..toc_bounds.end], top, parts);
    let toc_entries = entries::collect_entries(&lines[toc_bounds.end..], toc_style);

    // original lines before the entries (including the contents marker),
    // the regenerated entries, then the original lines after the entries
    let mut result = Vec::with_capacity(lines.len() + toc_entries.len());
    result.extend_from_slice(&lines[..toc_bounds.start]);
    result.extend(toc_entries);
    result.extend_from_slice(&lines[toc_bounds.end..]);
    Ok(result)
}
