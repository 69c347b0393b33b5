// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic primitives shared by the polygon builder and its consumers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A `(longitude, latitude)` pair in degrees.
///
/// Longitude lies in `[-180, 180]`, latitude in `[-90, 90]`.  No wrapping or
/// clamping is applied beyond what the terminator computation produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<(f64, f64)> for GeoPoint {
    #[inline]
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<GeoPoint> for [f64; 2] {
    #[inline]
    fn from(p: GeoPoint) -> Self {
        [p.lon, p.lat]
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

// GeoJSON positions are bare `[lon, lat]` arrays.
#[cfg(feature = "serde")]
impl Serialize for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.lon, self.lat].serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [lon, lat] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Self::new(lon, lat))
    }
}

/// The polar cap that closes a terminator ring.
///
/// The ring's vertex order follows the cap: a `North` ring keeps the
/// west-to-east sampling order, a `South` ring is emitted reversed.
/// Consumers that prefer one canonical orientation can branch on this tag
/// instead of inspecting the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DarkCap {
    /// Sun south of (or on) the equator: the north pole is in darkness.
    North,
    /// Sun north of the equator: the south pole is in darkness.
    South,
}

impl DarkCap {
    /// Cap in darkness for a given solar declination.
    #[inline]
    pub fn for_declination(declination: f64) -> Self {
        if declination > 0.0 {
            DarkCap::South
        } else {
            DarkCap::North
        }
    }

    /// Latitude of the closing pole, ±90°.
    #[inline]
    pub const fn pole_latitude(self) -> f64 {
        match self {
            DarkCap::North => 90.0,
            DarkCap::South => -90.0,
        }
    }
}
