//! Job-title normalization shared by the role handlers

/// Degenerate fragments that mark a title as generation noise rather than a
/// real job title.
const INVALID_FRAGMENTS: &[&str] = &["...", "plaintext", "summary", "metadata", "```"];

/// Normalize a job title for role comparison.
///
/// Lower-cases, fixes the known misspellings of "engineer" seen in the
/// dataset, and trims. Returns `None` for an absent or blank title.
pub fn normalize_role(title: Option<&str>) -> Option<String> {
    let title = title?.trim();
    if title.is_empty() {
        return None;
    }
    let normalized = title
        .to_lowercase()
        .replace("engeer", "engineer")
        .replace("enginner", "engineer")
        .trim()
        .to_string();
    Some(normalized)
}

/// Whether a normalized title counts as a real role.
///
/// Titles under 2 characters or containing any blocklisted fragment are
/// excluded from distinct-role counts and listings.
pub fn is_valid_role(role: &str) -> bool {
    if role.len() < 2 {
        return false;
    }
    let lower = role.to_lowercase();
    !INVALID_FRAGMENTS.iter().any(|fragment| lower.contains(fragment))
}
