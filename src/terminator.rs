// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day/night terminator polygons.
//!
//! For a given instant the terminator is the set of points where the Sun's
//! altitude is zero.  [`TerminatorCalculator`] samples it once per longitude
//! step, then closes the ring over whichever pole is in darkness so that the
//! resulting polygon covers the night side and never crosses itself.
//!
//! # Ring layout
//!
//! With `division = d` the ring holds `d + 4` vertices:
//!
//! | Index | [`DarkCap::North`] (δ ≤ 0) | [`DarkCap::South`] (δ > 0) |
//! |-------|-----------------------------|-----------------------------|
//! | `0` | first sample, lon −180 | first sample, lon −180 |
//! | … | samples west → east | `(−180, −90)`, `(180, −90)` |
//! | … | sample at lon 180 | sample at lon 180 |
//! | … | `(180, 90)`, `(−180, 90)` | samples east → west |
//! | `d + 3` | first sample again | first sample again |
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use duskline::{calculate, DarkCap};
//!
//! let instant = Utc.with_ymd_and_hms(2023, 12, 22, 3, 27, 0).unwrap();
//! let polygon = calculate(instant, 360).unwrap();
//!
//! assert_eq!(polygon.vertices().len(), 364);
//! assert!(polygon.is_closed());
//! assert_eq!(polygon.dark_cap(), DarkCap::North);
//! assert_eq!(polygon.datetime(), "2023-12-22T03:27:00.000Z");
//! ```

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::error::TerminatorError;
use crate::geo::{DarkCap, GeoPoint};
use crate::solar::SolarCoordinates;
use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

/// Sampling parameters for [`TerminatorCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TerminatorConfig {
    /// Number of longitude samples across the full −180..180 span.
    pub division: usize,
}

impl TerminatorConfig {
    /// Accepted values for [`TerminatorConfig::division`]: from a two-sample
    /// sketch up to one sample per arc-minute.
    pub const DIVISION_RANGE: RangeInclusive<usize> = 2..=21_600;

    /// One sample per degree of longitude.
    pub const DEFAULT_DIVISION: usize = 360;

    /// Build a validated configuration.
    pub fn new(division: usize) -> Result<Self, TerminatorError> {
        let config = Self { division };
        config.validate()?;
        Ok(config)
    }

    /// Check that the sample count lies in [`Self::DIVISION_RANGE`].
    pub fn validate(&self) -> Result<(), TerminatorError> {
        if Self::DIVISION_RANGE.contains(&self.division) {
            Ok(())
        } else {
            Err(TerminatorError::InvalidDivision(self.division))
        }
    }

    /// Longitude spacing between consecutive samples, in degrees.
    #[inline]
    pub fn step_degrees(&self) -> f64 {
        360.0 / self.division as f64
    }
}

impl Default for TerminatorConfig {
    fn default() -> Self {
        Self {
            division: Self::DEFAULT_DIVISION,
        }
    }
}

/// The night-side polygon at one instant.
///
/// Immutable once built.  With the `serde` feature it serialises as a GeoJSON
/// `Feature` whose geometry is a single-ring `Polygon`.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminatorPolygon {
    division: usize,
    vertices: Vec<GeoPoint>,
    timestamp: DateTime<Utc>,
    dark_cap: DarkCap,
    declination: f64,
}

impl TerminatorPolygon {
    /// Number of longitude samples the ring was built from.
    #[inline]
    pub fn division(&self) -> usize {
        self.division
    }

    /// The closed ring (`first == last`).
    #[inline]
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Consume the polygon, keeping only its ring.
    #[inline]
    pub fn into_vertices(self) -> Vec<GeoPoint> {
        self.vertices
    }

    /// The instant the polygon was computed for.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// ISO-8601 form of [`Self::timestamp`], e.g. `2023-06-21T14:57:00.000Z`.
    pub fn datetime(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Pole enclosed by the ring; also encodes the vertex order.
    #[inline]
    pub fn dark_cap(&self) -> DarkCap {
        self.dark_cap
    }

    /// Solar declination used for the ring, in degrees.
    #[inline]
    pub fn declination_degrees(&self) -> f64 {
        self.declination
    }

    /// Whether the first and last vertices coincide.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Terminator samples only, ordered west to east and ending with the
    /// sample at lon 180, regardless of [`Self::dark_cap`].
    pub fn samples(&self) -> Vec<GeoPoint> {
        let count = self.division + 1;
        match self.dark_cap {
            DarkCap::North => self.vertices[..count].to_vec(),
            DarkCap::South => {
                let mut samples: Vec<GeoPoint> = self.vertices[3..3 + count].to_vec();
                samples.reverse();
                samples
            }
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for TerminatorPolygon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Feature<'a> {
            #[serde(rename = "type")]
            kind: &'static str,
            properties: Properties,
            geometry: Geometry<'a>,
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Properties {
            datetime: String,
            dark_cap: DarkCap,
        }

        #[derive(Serialize)]
        struct Geometry<'a> {
            #[serde(rename = "type")]
            kind: &'static str,
            coordinates: [&'a [GeoPoint]; 1],
        }

        Feature {
            kind: "Feature",
            properties: Properties {
                datetime: self.datetime(),
                dark_cap: self.dark_cap,
            },
            geometry: Geometry {
                kind: "Polygon",
                coordinates: [&self.vertices],
            },
        }
        .serialize(serializer)
    }
}

/// Builds [`TerminatorPolygon`]s with a fixed, validated configuration.
///
/// The calculator holds no state besides its configuration; identical
/// instants always produce identical polygons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminatorCalculator {
    config: TerminatorConfig,
}

impl TerminatorCalculator {
    /// Wrap `config`; fails with [`TerminatorError::InvalidDivision`] when
    /// its division is out of range.
    pub fn new(config: TerminatorConfig) -> Result<Self, TerminatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Shorthand for `new(TerminatorConfig::new(division)?)`; same error.
    pub fn with_division(division: usize) -> Result<Self, TerminatorError> {
        Self::new(TerminatorConfig::new(division)?)
    }

    /// The validated sampling configuration.
    #[inline]
    pub fn config(&self) -> TerminatorConfig {
        self.config
    }

    /// Compute the terminator polygon at `instant`.
    pub fn calculate(&self, instant: DateTime<Utc>) -> TerminatorPolygon {
        let jd = JulianDate::from_utc(instant);
        let sun = SolarCoordinates::at(jd);
        let division = self.config.division;
        let step = self.config.step_degrees();

        debug!(
            jd = jd.value(),
            gmst_hours = sun.gmst_hours,
            right_ascension = sun.right_ascension.to_degrees(),
            declination = sun.declination_degrees(),
            division,
            "computing solar terminator"
        );

        let latitude_at = |lon_deg: f64| sun.terminator_latitude(lon_deg.to_radians()).to_degrees();

        let mut vertices = Vec::with_capacity(division + 4);
        // Longitudes are derived from the index so the sample count is exact.
        vertices.extend((0..division).map(|i| {
            let lon = -180.0 + i as f64 * step;
            GeoPoint::new(lon, latitude_at(lon))
        }));
        vertices.push(GeoPoint::new(
            180.0,
            sun.terminator_latitude(PI).to_degrees(),
        ));

        let dark_cap = DarkCap::for_declination(sun.declination);
        let pole = dark_cap.pole_latitude();
        let first = vertices[0];
        vertices.push(GeoPoint::new(180.0, pole));
        vertices.push(GeoPoint::new(-180.0, pole));
        vertices.push(first);
        if dark_cap == DarkCap::South {
            vertices.reverse();
        }

        TerminatorPolygon {
            division,
            vertices,
            timestamp: instant,
            dark_cap,
            declination: sun.declination_degrees(),
        }
    }

    /// Like [`Self::calculate`], for a raw count of milliseconds since the
    /// Unix epoch.  Sub-millisecond digits are truncated; non-finite or
    /// out-of-range counts give [`TerminatorError::InvalidTimestamp`].
    pub fn calculate_at_millis(&self, millis: f64) -> Result<TerminatorPolygon, TerminatorError> {
        if !millis.is_finite() {
            return Err(TerminatorError::InvalidTimestamp(millis));
        }
        // `as` saturates, and chrono rejects the saturated extremes.
        let instant = DateTime::from_timestamp_millis(millis.trunc() as i64)
            .ok_or(TerminatorError::InvalidTimestamp(millis))?;
        Ok(self.calculate(instant))
    }

    /// Compute the terminator polygon for the current system time.
    pub fn calculate_now(&self) -> TerminatorPolygon {
        self.calculate(Utc::now())
    }
}

/// Compute the terminator polygon at `instant` with `division` longitude samples.
pub fn calculate(
    instant: DateTime<Utc>,
    division: usize,
) -> Result<TerminatorPolygon, TerminatorError> {
    Ok(TerminatorCalculator::with_division(division)?.calculate(instant))
}

/// Compute the terminator polygon for the current system time.
pub fn calculate_now(division: usize) -> Result<TerminatorPolygon, TerminatorError> {
    Ok(TerminatorCalculator::with_division(division)?.calculate_now())
}

/// Compute the terminator polygon for a Unix timestamp in milliseconds.
pub fn calculate_at_millis(
    millis: f64,
    division: usize,
) -> Result<TerminatorPolygon, TerminatorError> {
    TerminatorCalculator::with_division(division)?.calculate_at_millis(millis)
}
