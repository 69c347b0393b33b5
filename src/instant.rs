// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Typed instants on a chosen epoch counter.
//!
//! A [`Time<S>`] is a day count whose epoch comes from the marker
//! `S: TimeScale`.  Every marker maps onto the civil **Julian Date** (UT
//! axis, leap seconds and ΔT ignored), which is what the solar formulas in
//! [`crate::solar`] consume:
//!
//! ```text
//! JD = unix_millis / 86 400 000 + 2 440 587.5
//! ```

use chrono::{DateTime, Utc};
use qtty::Days;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

/// Milliseconds in one civil day.
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// An epoch counter measured in days.
///
/// `to_jd` and `from_jd` move a day count between the scale's own epoch and
/// the Julian Period.  For the markers in [`crate::scales`] both are a
/// single constant offset.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix printed by `Display for Time<S>`.
    const LABEL: &'static str;

    fn to_jd(value: Days) -> Days;

    fn from_jd(jd: Days) -> Days;
}

/// A day count on scale `S`, stored as one `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Days since the epoch of `S`.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Re-express the same instant on scale `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time {
            quantity: T::from_jd(S::to_jd(self.quantity)),
            _scale: PhantomData,
        }
    }

    /// Instant of a UTC timestamp, sub-millisecond digits included.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let sub_millis = f64::from(datetime.timestamp_subsec_nanos() % 1_000_000) / 1e6;
        Self::from_unix_millis(datetime.timestamp_millis() as f64 + sub_millis)
    }

    /// Instant `millis` milliseconds after 1970-01-01T00:00:00Z.
    #[inline]
    pub fn from_unix_millis(millis: f64) -> Self {
        use super::scales::UnixTime;
        Time::<UnixTime>::new(millis / MILLIS_PER_DAY).to::<S>()
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::new((self.quantity + rhs).value())
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::super::scales::{UnixTime, JD};
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unix_epoch_is_jd_2440587_5() {
        let jd = Time::<JD>::from_unix_millis(0.0);
        assert_eq!(jd.value(), 2_440_587.5);
    }

    #[test]
    fn j2000_noon_has_no_delta_t() {
        let datetime = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = Time::<JD>::from_utc(datetime);
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn from_utc_keeps_milliseconds() {
        let datetime = DateTime::from_timestamp_millis(1_703_215_620_250).unwrap();
        let jd = Time::<JD>::from_utc(datetime);
        let expected = 1_703_215_620_250.0 / MILLIS_PER_DAY + 2_440_587.5;
        assert_eq!(jd.value(), expected);
    }

    #[test]
    fn unix_scale_counts_days_since_1970() {
        let unix = Time::<UnixTime>::from_utc(Utc.with_ymd_and_hms(1970, 1, 3, 0, 0, 0).unwrap());
        assert!((unix.quantity() - Days::new(2.0)).abs() < Days::new(1e-12));
    }

    #[test]
    fn day_arithmetic() {
        let jd = Time::<JD>::new(2_451_545.0);
        let later = jd + Days::new(1.5);
        assert_eq!(later.quantity(), Days::new(2_451_546.5));
        assert_eq!(later - jd, Days::new(1.5));
    }

    #[test]
    fn display_carries_the_scale_label() {
        assert!(format!("{}", Time::<JD>::new(2_451_545.0)).starts_with("Julian Day"));
        assert!(format!("{}", Time::<UnixTime>::new(1.0)).starts_with("Unix"));
    }
}
