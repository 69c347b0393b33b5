// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day/night terminator polygons and time-zone clock readings.
//!
//! # Core types
//!
//! - [`TerminatorCalculator`] — samples the solar terminator at an instant
//!   and closes it over the dark pole into a [`TerminatorPolygon`].
//! - [`TerminatorConfig`] — longitude sampling resolution.
//! - [`SolarCoordinates`] — GMST, right ascension and declination of the Sun.
//! - [`ZoneInfo`] — wall-clock time, UTC offset and DST flag of an IANA zone,
//!   produced by [`resolve`].
//! - [`Time<S>`] — instant parameterised by a [`TimeScale`] marker;
//!   [`JulianDate`] is the scale the solar formulas run on.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date (civil, no ΔT) |
//! | [`UnixTime`] | Unix / POSIX time in days |
//!
//! # Features
//!
//! - `serde` — `Serialize` for the public data types.  A
//!   [`TerminatorPolygon`] serialises as a GeoJSON `Feature`.
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]; install a subscriber in the
//! application to see them.

mod error;
mod geo;
pub(crate) mod instant;
mod julian_date_ext;
pub(crate) mod scales;
pub mod solar;
mod terminator;
pub mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{TerminatorError, ZoneError};
pub use geo::{DarkCap, GeoPoint};
pub use instant::{Time, TimeScale};
pub use scales::{UnixTime, JD};
pub use solar::SolarCoordinates;
pub use terminator::{
    calculate, calculate_at_millis, calculate_now, TerminatorCalculator, TerminatorConfig,
    TerminatorPolygon,
};
pub use zone::{
    format_zone_display, known_zones, resolve, resolve_now, try_resolve, ZoneDisplay, ZoneInfo,
    UNKNOWN_ZONE,
};

/// Julian Date — continuous count of days since the Julian Period, on the
/// civil (UTC) axis.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;
