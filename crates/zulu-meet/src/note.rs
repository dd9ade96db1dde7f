//! Note and badge text composition.
//!
//! Locale templates carry `{{time}}`, `{{offset}}` and `{{letter}}` markers.
//! Each marker is substituted exactly once (first occurrence only); a
//! template that omits a marker simply keeps its text for that slot.

use crate::letter::format_offset;

/// Compose the human-readable note under the formatted code.
///
/// # Arguments
///
/// * `template` — Note template with `{{time}}` and `{{offset}}` markers.
/// * `local_label` — The `"HH:MM"` local wall-clock label.
/// * `offset` — The offset rendered into `{{offset}}` (signed, `"+0"` for
///   zero).
/// * `meeting_name` — Optional label; when non-empty after trimming, the
///   note is prefixed with `"<name> — "`.
///
/// # Examples
///
/// ```
/// use zulu_core::note::compose_note;
///
/// let note = compose_note("At {{time}} ({{offset}})", "14:30", 2, None);
/// assert_eq!(note, "At 14:30 (+2)");
/// ```
pub fn compose_note(
    template: &str,
    local_label: &str,
    offset: i32,
    meeting_name: Option<&str>,
) -> String {
    let base = template
        .replacen("{{time}}", local_label, 1)
        .replacen("{{offset}}", &format_offset(offset), 1);
    match meeting_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("{name} — {base}"),
        None => base,
    }
}

/// Render the local-offset badge shown next to the controls.
pub fn local_badge(template: &str, offset: i32, letter: char) -> String {
    template
        .replacen("{{offset}}", &format_offset(offset), 1)
        .replacen("{{letter}}", letter.to_string().as_str(), 1)
}
