//! Shared utility functions

/// Labels longer than this are truncated for display
const MAX_LABEL_CHARS: usize = 20;
/// How many characters survive truncation, before the ellipsis
const KEPT_CHARS: usize = 17;

/// Truncate a long diagnosis label for display
///
/// Labels longer than 20 characters become their first 17 characters plus
/// `"..."`. Presentation only: grouping and filtering always use the full
/// label.
#[must_use]
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let kept: String = label.chars().take(KEPT_CHARS).collect();
        format!("{kept}...")
    } else {
        label.to_string()
    }
}
