//! Locale catalog: translated UI strings with built-in English fallbacks.
//!
//! The catalog is a flat JSON document keyed by lowercase locale tag
//! (`"en-us"`, `"de"`, …); each bundle maps display keys to a string, or a
//! list of strings for the instructional lines. The whole catalog/locale
//! pair is owned and replaced wholesale — the formatting layer only ever
//! sees a complete [`Locale`] by reference, so there is no partial-update
//! window while a reload is in flight.
//!
//! Every accessor falls back to the built-in English default when the key
//! is absent, so a missing key, a missing locale, or a failed load all
//! degrade to a fully rendered widget.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::error::{Result, ZuluError};

/// Tag used when the requested locale has no match in the catalog.
pub const DEFAULT_LOCALE: &str = "en-us";

const DEFAULT_REFERENCE_UTC: &str = "UTC";
const DEFAULT_FORMATTED_NOTE: &str = "Local time: {{time}} (UTC{{offset}})";
const DEFAULT_LOCAL_BADGE: &str = "Local offset: UTC{{offset}} → {{letter}}";
const DEFAULT_COPY_BTN: &str = "Copy code";
const DEFAULT_COPY_SUCCESS: &str = "Copied!";
const DEFAULT_COPY_FAIL: &str = "Copy unavailable. Select the text above.";
const DEFAULT_HOW_LIST: [&str; 3] = [
    "Pick a UTC offset to see its zone letter.",
    "Choose the meeting time; the code carries the target zone's minutes and seconds.",
    "Copy the letter code and share it with the other side.",
];

/// One locale's translated strings. Unknown keys in the document are
/// ignored; every getter falls back to the English default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Locale {
    reference_utc: Option<String>,
    formatted_note: Option<String>,
    local_badge: Option<String>,
    copy_btn: Option<String>,
    copy_success: Option<String>,
    copy_fail: Option<String>,
    how_list: Option<Vec<String>>,
}

impl Locale {
    /// Label prefixed to offset displays, e.g. `"UTC"` in `"UTC+5"`.
    pub fn reference_utc(&self) -> &str {
        self.reference_utc.as_deref().unwrap_or(DEFAULT_REFERENCE_UTC)
    }

    /// Note template with `{{time}}` and `{{offset}}` markers.
    pub fn formatted_note(&self) -> &str {
        self.formatted_note.as_deref().unwrap_or(DEFAULT_FORMATTED_NOTE)
    }

    /// Badge template with `{{offset}}` and `{{letter}}` markers.
    pub fn local_badge(&self) -> &str {
        self.local_badge.as_deref().unwrap_or(DEFAULT_LOCAL_BADGE)
    }

    /// Idle label for the copy control.
    pub fn copy_btn(&self) -> &str {
        self.copy_btn.as_deref().unwrap_or(DEFAULT_COPY_BTN)
    }

    /// Label shown briefly after a successful clipboard write.
    pub fn copy_success(&self) -> &str {
        self.copy_success.as_deref().unwrap_or(DEFAULT_COPY_SUCCESS)
    }

    /// Note text swapped in when the clipboard write fails.
    pub fn copy_fail(&self) -> &str {
        self.copy_fail.as_deref().unwrap_or(DEFAULT_COPY_FAIL)
    }

    /// Instructional lines for the "how it works" list.
    pub fn how_list(&self) -> Vec<String> {
        match &self.how_list {
            Some(lines) if !lines.is_empty() => lines.clone(),
            _ => DEFAULT_HOW_LIST.iter().map(|line| (*line).to_string()).collect(),
        }
    }
}

/// The full locale document, keyed by lowercase locale tag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LocaleCatalog {
    bundles: BTreeMap<String, Locale>,
}

impl LocaleCatalog {
    /// Parse a locale JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::InvalidLocale`] when the document is not valid
    /// JSON or a bundle value has the wrong shape. Adapters that cannot
    /// surface the error should use [`LocaleCatalog::parse_or_default`].
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| ZuluError::InvalidLocale(err.to_string()))
    }

    /// Parse a locale document, degrading to an empty catalog on failure.
    ///
    /// An empty catalog makes every lookup land on the built-in defaults —
    /// a complete, valid outcome, so the failure is only worth a warning.
    pub fn parse_or_default(json: &str) -> Self {
        match Self::parse(json) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(%err, "locale load failed, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve a requested language tag to a catalog key.
    ///
    /// Exact case-insensitive match first, then the primary subtag (the
    /// part before any `-` region suffix), then [`DEFAULT_LOCALE`].
    pub fn detect(&self, requested: &str) -> String {
        let tag = requested.trim().to_ascii_lowercase();
        if self.bundles.contains_key(&tag) {
            return tag;
        }
        if let Some(primary) = tag.split('-').next() {
            if self.bundles.contains_key(primary) {
                return primary.to_string();
            }
        }
        DEFAULT_LOCALE.to_string()
    }

    /// The bundle for a requested tag, applying the detection policy.
    ///
    /// A tag that resolves to a locale absent from the catalog yields the
    /// all-defaults bundle.
    pub fn select(&self, requested: &str) -> Locale {
        let tag = self.detect(requested);
        self.bundles.get(&tag).cloned().unwrap_or_default()
    }
}
