use lazy_static::lazy_static;
use regex::Regex;

use crate::toc::anchor::heading_anchor;
use crate::toc::style::TocStyle;

lazy_static! {
    /// An indexed heading: one to three `#`, a single space, then the text.
    /// Runs of four or more fail the match and stay out of the TOC.
    static ref HEADING_REGEX: Regex = Regex::new(r"^(#{1,3}) (.*)$").unwrap();
}

/// Scan body lines for headings and render each as a TOC entry line.
///
/// The caller passes everything after the old TOC region, so any non-indexed
/// front section is already stripped. Lines that fail the heading pattern are
/// not headings; nothing here fails on arbitrary body content.
pub fn collect_entries(body: &[String], style: TocStyle) -> Vec<String> {
    let mut entries = Vec::new();
    for line in body {
        if let Some(caps) = HEADING_REGEX.captures(line.trim_end()) {
            let level = caps[1].len();
            push_entry(&mut entries, level, &caps[2], style);
        }
    }
    entries
}

/// Resolve the rendering level of a heading under the active style.
/// Level 0 and below render as top-level bracketed entries.
fn resolve_level(level: usize, text: &str, style: TocStyle) -> i32 {
    let level = level as i32;
    if style.use_parts && level == 1 && text.starts_with("Part ") {
        return 0;
    }
    if style.use_parts && !style.use_top {
        return level + 1;
    }
    if style.use_top {
        return level - 1;
    }
    level
}

fn push_entry(entries: &mut Vec<String>, level: usize, text: &str, style: TocStyle) {
    let href = heading_anchor(text);

    match resolve_level(level, text, style) {
        resolved if resolved <= 0 => {
            // top-level groups get a blank separator, except the first entry
            if !entries.is_empty() {
                entries.push(String::from("\n"));
            }
            entries.push(format!("[{}]({})\n", text, href));
        }
        resolved => {
            let indent = "  ".repeat(resolved as usize - 1);
            entries.push(format!("{}* [{}]({})\n", indent, text, href));
        }
    }
}
