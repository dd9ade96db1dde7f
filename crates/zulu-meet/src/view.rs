//! One-shot computation of every display-region string.
//!
//! The rendering surface (terminal or browser page) owns the controls and
//! pushes their values in as a [`ViewInputs`]; it gets back a complete
//! [`WidgetView`] and copies each field into its region. All the logic
//! lives here so the adapter layer stays free of computation.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::letter::{format_offset, letter_for};
use crate::locale::Locale;
use crate::moment::{format_code, local_label, local_offset_hours};
use crate::note;

/// Current control values, as read by the adapter.
#[derive(Debug, Clone, Copy)]
pub struct ViewInputs<'a> {
    /// The user-selected zone offset in whole hours.
    pub offset: i32,
    /// The meeting moment as local wall-clock time.
    pub moment: NaiveDateTime,
    /// The device's UTC offset in minutes east of UTC.
    pub local_offset_minutes: i32,
    /// The free-text meeting name, if any.
    pub meeting_name: Option<&'a str>,
}

/// Every string the widget renders, recomputed whenever a control changes.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    /// The phonetic time code, e.g. `"Z05:09"`.
    pub formatted_code: String,
    /// The human-readable note under the code.
    pub note: String,
    /// The selected zone's letter on its own.
    pub letter_display: String,
    /// The selected zone as `"UTC+N"`.
    pub offset_display: String,
    /// The device-offset badge, e.g. `"Local offset: UTC+2 → B"`.
    pub local_badge: String,
    /// Instructional lines for the how-it-works list.
    pub how_lines: Vec<String>,
    /// Idle label for the copy control.
    pub copy_label: String,
    /// Label shown after a successful copy.
    pub copy_success_label: String,
    /// Note text swapped in when the clipboard write fails.
    pub copy_fail_note: String,
}

impl WidgetView {
    /// Compute the full view from the current inputs and active locale.
    ///
    /// The note describes the *device's* local time and offset; the code
    /// and the letter/offset displays describe the *selected* zone.
    pub fn build(inputs: &ViewInputs<'_>, locale: &Locale) -> Self {
        let letter = letter_for(inputs.offset);
        let local_hours = local_offset_hours(inputs.local_offset_minutes);

        let note = note::compose_note(
            locale.formatted_note(),
            &local_label(inputs.moment),
            local_hours,
            inputs.meeting_name,
        );

        WidgetView {
            formatted_code: format_code(inputs.offset, inputs.moment, inputs.local_offset_minutes),
            note,
            letter_display: letter.to_string(),
            offset_display: format!(
                "{}{}",
                locale.reference_utc(),
                format_offset(inputs.offset)
            ),
            local_badge: note::local_badge(
                locale.local_badge(),
                local_hours,
                letter_for(local_hours),
            ),
            how_lines: locale.how_list(),
            copy_label: locale.copy_btn().to_string(),
            copy_success_label: locale.copy_success().to_string(),
            copy_fail_note: locale.copy_fail().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn inputs(offset: i32, meeting_name: Option<&str>) -> ViewInputs<'_> {
        ViewInputs {
            offset,
            moment: NaiveDate::from_ymd_opt(2026, 3, 16)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            local_offset_minutes: 120,
            meeting_name,
        }
    }

    #[test]
    fn test_view_with_default_locale() {
        let view = WidgetView::build(&inputs(5, None), &Locale::default());
        // Local 14:30 at UTC+2 is 12:30 UTC; zone +5 reads 17:30:00.
        assert_eq!(view.formatted_code, "E30:00");
        assert_eq!(view.note, "Local time: 14:30 (UTC+2)");
        assert_eq!(view.letter_display, "E");
        assert_eq!(view.offset_display, "UTC+5");
        assert_eq!(view.local_badge, "Local offset: UTC+2 → B");
        assert_eq!(view.how_lines.len(), 3);
        assert_eq!(view.copy_label, "Copy code");
    }

    #[test]
    fn test_view_meeting_name_prefixes_note() {
        let view = WidgetView::build(&inputs(0, Some("Standup")), &Locale::default());
        assert_eq!(view.note, "Standup — Local time: 14:30 (UTC+2)");
    }

    #[test]
    fn test_view_out_of_range_offset_still_renders() {
        let view = WidgetView::build(&inputs(99, None), &Locale::default());
        assert_eq!(view.letter_display, "?");
        assert_eq!(view.offset_display, "UTC+99");
        assert!(view.formatted_code.starts_with('?'));
    }

    #[test]
    fn test_view_is_serializable() {
        let view = WidgetView::build(&inputs(0, None), &Locale::default());
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("formatted_code"));
    }
}
