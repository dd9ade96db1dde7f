//! # zulu-meet
//!
//! Military time-zone letter codes and locale-aware meeting time formatting.
//!
//! Given a UTC offset in whole hours and a local date/time, the library
//! produces the one-letter military designator (Z = UTC, A..M for positive
//! offsets skipping J, N..Y for negative), a compact phonetic time code
//! combining the letter with the target zone's minute/second values, and
//! locale-aware note text. Everything here is pure computation with
//! explicit inputs — no clock, no I/O — so the same crate backs both the
//! terminal and WASM rendering surfaces.
//!
//! ## Modules
//!
//! - [`letter`] — offset → military letter lookup and the 25-entry display table
//! - [`moment`] — meeting-moment parsing and phonetic time-code formatting
//! - [`note`] — note/badge template substitution
//! - [`locale`] — locale catalog with built-in English fallbacks
//! - [`view`] — one-shot computation of every display-region string
//! - [`error`] — error types

pub mod error;
pub mod letter;
pub mod locale;
pub mod moment;
pub mod note;
pub mod view;

pub use error::ZuluError;
pub use letter::{all_entries, format_offset, letter_for, LetterEntry, SENTINEL_LETTER};
pub use locale::{Locale, LocaleCatalog, DEFAULT_LOCALE};
pub use moment::{
    default_meeting_moment, format_code, local_label, local_offset_hours, parse_moment,
};
pub use note::{compose_note, local_badge};
pub use view::{ViewInputs, WidgetView};
