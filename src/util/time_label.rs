//! Local `hour:minute` labels for message timestamps.
//!
//! Labels are derived on every render from the stored UTC timestamp; the
//! message itself is never touched. The hour cycle follows the browser
//! locale (`Intl.DateTimeFormat`) when running hydrated and defaults to
//! 24-hour elsewhere.

#[cfg(test)]
#[path = "time_label_test.rs"]
mod time_label_test;

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourCycle {
    /// `14:05`
    #[default]
    H23,
    /// `02:05 PM`
    H12,
}

impl HourCycle {
    /// Map an `Intl` `hourCycle` value (`h11`, `h12`, `h23`, `h24`).
    #[must_use]
    pub fn from_intl(raw: &str) -> Self {
        match raw {
            "h11" | "h12" => Self::H12,
            _ => Self::H23,
        }
    }

    /// Hour cycle preferred by the current locale.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsValue;

            let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
            let options = format.resolved_options();
            match js_sys::Reflect::get(&options, &JsValue::from_str("hourCycle")) {
                Ok(value) => value.as_string().map_or(Self::H23, |raw| Self::from_intl(&raw)),
                Err(e) => {
                    leptos::logging::warn!("hourCycle lookup failed, using 24-hour labels: {e:?}");
                    Self::H23
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::H23
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Self::H23 => "%H:%M",
            Self::H12 => "%I:%M %p",
        }
    }
}

/// Format `ts` as wall-clock time in `tz`.
pub fn format_time_label<Tz>(ts: &DateTime<Utc>, tz: &Tz, cycle: HourCycle) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    ts.with_timezone(tz).format(cycle.pattern()).to_string()
}

/// Format `ts` in the host's local time zone.
pub fn local_time_label(ts: &DateTime<Utc>, cycle: HourCycle) -> String {
    format_time_label(ts, &Local, cycle)
}

/// Label for a tree that may be server-rendered: empty until mounted in the
/// viewer's browser, whose zone and locale the server does not know.
pub fn mounted_time_label(ts: &DateTime<Utc>, cycle: HourCycle, mounted: bool) -> String {
    if mounted { local_time_label(ts, cycle) } else { String::new() }
}
