//! WASM bindings for the zone-letter widget.
//!
//! The page stays a thin adapter: it fetches the locale document, reads
//! control values on each input event, and forwards them here. No clock is
//! read on this side of the boundary — the page passes its own "now" as a
//! `datetime-local` string, which keeps the core deterministic and avoids
//! pulling a JS clock shim into the build.

use wasm_bindgen::prelude::*;
use zulu_core::{
    all_entries, letter_for as core_letter_for, local_offset_hours as core_local_offset_hours,
    parse_moment, Locale, LocaleCatalog, ViewInputs, WidgetView,
};

/// The designator letter for a whole-hour UTC offset (`"?"` out of range).
#[wasm_bindgen]
pub fn letter_for(offset: i32) -> String {
    core_letter_for(offset).to_string()
}

/// The device offset rounded to whole hours, from minutes east of UTC
/// (pass `-new Date().getTimezoneOffset()`).
#[wasm_bindgen]
pub fn local_offset_hours(local_offset_minutes: i32) -> i32 {
    core_local_offset_hours(local_offset_minutes)
}

/// The 25-entry designator table as a JSON array, +12 down to -12.
#[wasm_bindgen]
pub fn entries_json() -> String {
    serde_json::to_string(&all_entries()).unwrap_or_default()
}

/// The picker preset: `now` rounded down to the hour, as a
/// `datetime-local` value (`YYYY-MM-DDTHH:MM`).
#[wasm_bindgen]
pub fn default_meeting_value(now: &str) -> String {
    let moment = parse_moment(now).unwrap_or_default();
    zulu_core::default_meeting_moment(moment)
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

/// Handle owning the active locale, created once after the locale fetch
/// resolves (or fails) and replaced wholesale on a locale change.
#[wasm_bindgen]
pub struct Widget {
    locale: Locale,
    tag: String,
}

#[wasm_bindgen]
impl Widget {
    /// Build a widget from the fetched locale document and the browser's
    /// language tag. A failed fetch is passed in as an empty string; the
    /// built-in defaults take over.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str, lang: &str) -> Widget {
        let catalog = LocaleCatalog::parse_or_default(catalog_json);
        let tag = catalog.detect(lang);
        let locale = catalog.select(lang);
        Widget { locale, tag }
    }

    /// The catalog key the language tag resolved to.
    #[wasm_bindgen(getter)]
    pub fn locale_tag(&self) -> String {
        self.tag.clone()
    }

    /// Recompute every display region; returns the view as a JSON object.
    ///
    /// `moment_input` is the raw picker value and may be unparsable, in
    /// which case `now` (same format) takes its place.
    pub fn view_json(
        &self,
        offset: i32,
        moment_input: &str,
        now: &str,
        local_offset_minutes: i32,
        meeting_name: &str,
    ) -> String {
        let moment = parse_moment(moment_input)
            .or_else(|| parse_moment(now))
            .unwrap_or_default();
        let inputs = ViewInputs {
            offset,
            moment,
            local_offset_minutes,
            meeting_name: Some(meeting_name),
        };
        serde_json::to_string(&WidgetView::build(&inputs, &self.locale)).unwrap_or_default()
    }

    /// Copy-control labels, for the page's best-effort clipboard handling.
    pub fn copy_label(&self) -> String {
        self.locale.copy_btn().to_string()
    }

    pub fn copy_success_label(&self) -> String {
        self.locale.copy_success().to_string()
    }

    /// Note text the page swaps in when the clipboard write rejects.
    pub fn copy_fail_note(&self) -> String {
        self.locale.copy_fail().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_from_failed_fetch_uses_defaults() {
        let widget = Widget::new("", "en-US");
        assert_eq!(widget.locale_tag(), "en-us");
        assert_eq!(widget.copy_label(), "Copy code");
        assert_eq!(
            widget.copy_fail_note(),
            "Copy unavailable. Select the text above."
        );
    }

    #[test]
    fn test_view_json_round_trips_regions() {
        let widget = Widget::new(
            r#"{ "de": { "formattedNote": "Ortszeit: {{time}} (UTC{{offset}})" } }"#,
            "de-AT",
        );
        assert_eq!(widget.locale_tag(), "de");
        let view = widget.view_json(5, "2026-03-16T14:30", "2026-03-16T15:00", 120, "Standup");
        let parsed: serde_json::Value = serde_json::from_str(&view).unwrap();
        assert_eq!(parsed["formatted_code"], "E30:00");
        assert_eq!(parsed["note"], "Standup — Ortszeit: 14:30 (UTC+2)");
        assert_eq!(parsed["letter_display"], "E");
    }

    #[test]
    fn test_unparsable_picker_value_falls_back_to_now() {
        let widget = Widget::new("", "en-us");
        let view = widget.view_json(0, "garbage", "2026-03-16T10:07:03", 0, "");
        let parsed: serde_json::Value = serde_json::from_str(&view).unwrap();
        assert_eq!(parsed["formatted_code"], "Z07:03");
    }

    #[test]
    fn test_default_meeting_value_rounds_down() {
        assert_eq!(
            default_meeting_value("2026-03-16T14:37:22"),
            "2026-03-16T14:00"
        );
    }

    #[test]
    fn test_entries_json_shape() {
        let entries: serde_json::Value = serde_json::from_str(&entries_json()).unwrap();
        assert_eq!(entries.as_array().unwrap().len(), 25);
        assert_eq!(entries[12]["letter"], "Z");
    }
}
