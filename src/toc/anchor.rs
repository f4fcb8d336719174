/// Derive the URL fragment for a heading.
///
/// eg: "II.1 Interlude: Body and Control (first part)" becomes
/// `#ii1-interlude-body-and-control-first-part`.
///
/// Keeps ASCII letters, digits, hyphens, and spaces; every other character is
/// dropped, not replaced. The remainder is lowercased and each space becomes
/// a hyphen. Lossy, deterministic, and idempotent for a given heading text.
pub fn heading_anchor(heading: &str) -> String {
    let cleaned: String = heading
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect();

    format!("#{}", cleaned.to_lowercase().replace(' ', "-"))
}
