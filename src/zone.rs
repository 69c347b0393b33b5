// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! IANA time-zone lookups.
//!
//! Resolves a zone identifier such as `"Asia/Tokyo"` against the tz database
//! compiled into `chrono-tz` and reports the wall-clock time, UTC offset and
//! daylight-saving status at a given instant.
//!
//! [`resolve`] never fails: an unknown identifier is logged and answered
//! with the system's local time under the [`UNKNOWN_ZONE`] label.  Use
//! [`try_resolve`] to observe the failure instead.

use chrono::{DateTime, Datelike, Local, Offset, TimeZone, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use tracing::{trace, warn};

use crate::error::ZoneError;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Zone label reported when a lookup falls back to system local time.
pub const UNKNOWN_ZONE: &str = "Unknown";

const CLOCK_FORMAT: &str = "%H:%M";

/// Local clock reading for one zone at one instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ZoneInfo {
    /// Wall-clock time, `HH:MM` on a 24-hour clock.
    pub local_time: String,
    pub is_daylight_saving: bool,
    /// Signed hours east of UTC, DST included.  May be fractional (5.5, 5.75).
    pub utc_offset_hours: f64,
    /// The requested identifier, or [`UNKNOWN_ZONE`].
    pub zone_id: String,
}

impl ZoneInfo {
    /// Reading for a recognised zone.
    pub fn in_zone(tz: Tz, instant: DateTime<Utc>) -> Self {
        let local = instant.with_timezone(&tz);
        let seconds_east = local.offset().fix().local_minus_utc();
        Self {
            local_time: local.format(CLOCK_FORMAT).to_string(),
            is_daylight_saving: seconds_east > standard_offset(tz, local.year()),
            utc_offset_hours: offset_hours(seconds_east),
            zone_id: tz.name().to_owned(),
        }
    }

    /// Fallback reading: the system's local wall clock, reported as
    /// [`UNKNOWN_ZONE`] with a zero offset and no DST.
    pub fn fallback(instant: DateTime<Utc>) -> Self {
        Self {
            local_time: instant
                .with_timezone(&Local)
                .format(CLOCK_FORMAT)
                .to_string(),
            is_daylight_saving: false,
            utc_offset_hours: 0.0,
            zone_id: UNKNOWN_ZONE.to_owned(),
        }
    }

    /// Whether this reading came from [`ZoneInfo::fallback`].
    pub fn is_unknown(&self) -> bool {
        self.zone_id == UNKNOWN_ZONE
    }
}

/// The zone's standard offset for `year`: the smaller of its offsets on
/// 1 January and 1 July.
///
/// The tz database marks Irish winter time and Moroccan Ramadan time as
/// negative saving, so its own DST component cannot be trusted for the flag.
fn standard_offset(tz: Tz, year: i32) -> i32 {
    [1, 7]
        .into_iter()
        .filter_map(|month| Utc.with_ymd_and_hms(year, month, 1, 12, 0, 0).single())
        .map(|t| t.with_timezone(&tz).offset().fix().local_minus_utc())
        .min()
        .unwrap_or_default()
}

#[inline]
fn offset_hours(seconds_east: i32) -> f64 {
    f64::from(seconds_east) / 3600.0
}

/// Parse an IANA identifier into a tz database entry.
pub fn parse_zone(zone_id: &str) -> Result<Tz, ZoneError> {
    zone_id
        .parse::<Tz>()
        .map_err(|_| ZoneError::UnrecognizedZone(zone_id.to_owned()))
}

/// Resolve `zone_id` at `instant`, reporting unknown zones to the caller.
pub fn try_resolve(zone_id: &str, instant: DateTime<Utc>) -> Result<ZoneInfo, ZoneError> {
    let tz = parse_zone(zone_id)?;
    let mut info = ZoneInfo::in_zone(tz, instant);
    // Echo the caller's spelling; links such as "US/Eastern" keep their name.
    info.zone_id = zone_id.to_owned();
    Ok(info)
}

/// Resolve `zone_id` at `instant`, falling back to system local time.
pub fn resolve(zone_id: &str, instant: DateTime<Utc>) -> ZoneInfo {
    match try_resolve(zone_id, instant) {
        Ok(info) => {
            trace!(
                zone_id,
                local_time = %info.local_time,
                utc_offset_hours = info.utc_offset_hours,
                is_daylight_saving = info.is_daylight_saving,
                "resolved time zone"
            );
            info
        }
        Err(err) => {
            warn!(zone_id, error = %err, "time zone lookup failed, using system local time");
            ZoneInfo::fallback(instant)
        }
    }
}

/// [`resolve`] at the current system time.
pub fn resolve_now(zone_id: &str) -> ZoneInfo {
    resolve(zone_id, Utc::now())
}

/// Human-readable parts of an IANA identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ZoneDisplay {
    /// First path segment, e.g. `America`.
    pub region: String,
    /// Last path segment with underscores as spaces, e.g. `New York`.
    pub city: String,
    /// `"{city}, {region}"`.
    pub full: String,
}

/// Split `"America/Argentina/Buenos_Aires"` into region `America` and city
/// `Buenos Aires`.  Identifiers without a slash use the whole name for both.
pub fn format_zone_display(zone_id: &str) -> ZoneDisplay {
    let mut parts = zone_id.split('/');
    let region = parts.next().unwrap_or_default().to_owned();
    let city = parts
        .next_back()
        .unwrap_or(region.as_str())
        .replace('_', " ");
    let full = format!("{city}, {region}");
    ZoneDisplay { region, city, full }
}

/// Every identifier known to the compiled tz database, links included.
pub fn known_zones() -> impl Iterator<Item = &'static str> {
    TZ_VARIANTS.iter().map(|tz| tz.name())
}
