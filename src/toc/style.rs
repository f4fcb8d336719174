use crate::config::FlagSetting;

/// Rendering convention resolved for one document, immutable for the
/// duration of that document's transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocStyle {
    /// Top-level entries render as bare bracketed links, without a bullet
    pub use_top: bool,
    /// "Part" headings form an extra grouping level above chapters
    pub use_parts: bool,
}

/// Outcome of a style-inference scan: whether any evidence was found at all,
/// and what it said. Distinguishing "no evidence" from a definite negative
/// keeps the ambiguous case from silently resolving the wrong way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub found: bool,
    pub value: bool,
}

impl Detection {
    fn none() -> Self {
        Detection { found: false, value: false }
    }

    fn of(value: bool) -> Self {
        Detection { found: true, value }
    }

    pub fn value_or(self, default: bool) -> bool {
        if self.found { self.value } else { default }
    }
}

/// Top-level-without-bullet evidence: the first existing entry line is a
/// bracketed link rather than a bullet.
pub fn detect_top(entries: &[String]) -> Detection {
    match entries.first() {
        Some(first) => Detection::of(first.starts_with('[')),
        None => Detection::none(),
    }
}

/// Parts-grouping evidence, scanned in order with early stopping: a
/// `[Part ` entry immediately followed by a bulleted entry is a positive;
/// any earlier bracketed entry that is not a part line is a definite
/// negative. A part line without a bulleted follower decides nothing.
pub fn detect_parts(entries: &[String]) -> Detection {
    for (i, line) in entries.iter().enumerate() {
        if !line.starts_with('[') {
            continue;
        }
        if !line.starts_with("[Part ") {
            return Detection::of(false);
        }
        let next_is_bulleted = entries
            .get(i + 1)
            .map(|next| next.trim_start().starts_with("* ["))
            .unwrap_or(false);
        if next_is_bulleted {
            return Detection::of(true);
        }
    }
    Detection::none()
}

/// Resolve the document's style from explicit overrides and the existing
/// TOC entries. Overrides always win over inference, and parts implies
/// top-level rendering unless top was explicitly forced off.
pub fn resolve_style(entries: &[String], top: FlagSetting, parts: FlagSetting) -> TocStyle {
    let use_parts = match parts.forced() {
        Some(value) => value,
        None => detect_parts(entries).value_or(false),
    };

    let use_top = match top.forced() {
        Some(value) => value,
        None if use_parts => true,
        None => detect_top(entries).value_or(false),
    };

    TocStyle { use_top, use_parts }
}
