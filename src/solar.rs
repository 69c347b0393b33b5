// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar ephemeris.
//!
//! The formulas below give the apparent equatorial position of the Sun to
//! roughly 0.01° over a few centuries around J2000, which is far more than a
//! rendered day/night overlay needs.  All inputs are civil Julian Dates
//! ([`JulianDate`]); angles are returned in **radians** unless the function
//! name says otherwise.
//!
//! Reductions use the truncating remainder (`%`), so instants before J2000
//! yield negative angles.  Every consumer feeds them to periodic functions.

use std::f64::consts::PI;

use crate::JulianDate;

/// GMST at J2000.0, in hours.
const GMST_AT_J2000_HOURS: f64 = 18.697_374_558;
/// Sidereal hours elapsed per civil day.
const SIDEREAL_HOURS_PER_DAY: f64 = 24.065_709_824_419_08;

/// Greenwich Mean Sidereal Time in hours, reduced modulo 24.
pub fn greenwich_mean_sidereal_time(jd: JulianDate) -> f64 {
    let n = jd.days_since_j2000().value();
    (GMST_AT_J2000_HOURS + SIDEREAL_HOURS_PER_DAY * n) % 24.0
}

/// Apparent ecliptic longitude of the Sun `λ`.
///
/// Mean longitude `L` plus the two leading equation-of-centre terms of the
/// mean anomaly `g`.
pub fn sun_ecliptic_longitude(jd: JulianDate) -> f64 {
    let n = jd.days_since_j2000().value();
    let mean_longitude = (280.46 + 0.985_647_4 * n) % 360.0;
    let mean_anomaly = ((357.528 + 0.985_600_3 * n) % 360.0).to_radians();
    (mean_longitude + 1.915 * mean_anomaly.sin() + 0.02 * (2.0 * mean_anomaly).sin()).to_radians()
}

/// Mean obliquity of the ecliptic `ε`, a cubic in Julian centuries since J2000.
pub fn ecliptic_obliquity(jd: JulianDate) -> f64 {
    let t = jd.julian_centuries().value();
    let arcsec = 84_381.406 - 46.836_769 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    (arcsec / 3600.0).to_radians()
}

/// Equatorial position of the Sun at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarCoordinates {
    /// Greenwich Mean Sidereal Time, hours.
    pub gmst_hours: f64,
    /// Right ascension `α`, radians.
    pub right_ascension: f64,
    /// Declination `δ`, radians.
    pub declination: f64,
}

impl SolarCoordinates {
    /// Compute the Sun's position for a civil Julian Date.
    pub fn at(jd: JulianDate) -> Self {
        let (right_ascension, declination) =
            equatorial_from_ecliptic(sun_ecliptic_longitude(jd), ecliptic_obliquity(jd));
        Self {
            gmst_hours: greenwich_mean_sidereal_time(jd),
            right_ascension,
            declination,
        }
    }

    /// Declination in degrees.
    #[inline]
    pub fn declination_degrees(&self) -> f64 {
        self.declination.to_degrees()
    }

    /// Hour angle of the Sun seen from `longitude` (radians east).
    #[inline]
    pub fn hour_angle(&self, longitude: f64) -> f64 {
        (self.gmst_hours * 15.0).to_radians() + longitude - self.right_ascension
    }

    /// Latitude (radians) at which the Sun sits on the horizon for the given
    /// longitude (radians east).
    ///
    /// `tan δ → 0` sends the quotient to ±∞ and `atan` lands on a pole, which
    /// is the correct limit.  The 0/0 case (δ = 0 and cos H = 0) has no
    /// unique answer and is pinned to the equator.
    pub fn terminator_latitude(&self, longitude: f64) -> f64 {
        let latitude = (-self.hour_angle(longitude).cos() / self.declination.tan()).atan();
        if latitude.is_nan() {
            0.0
        } else {
            latitude
        }
    }
}

/// Rotate ecliptic longitude `λ` by obliquity `ε` into `(α, δ)`.
///
/// `atan` only covers a half turn, so `α` is moved into the quadrant of `λ`
/// by looking at the sign of `sin λ`.
pub fn equatorial_from_ecliptic(longitude: f64, obliquity: f64) -> (f64, f64) {
    let mut alpha = (longitude.tan() * obliquity.cos()).atan();
    let delta = (longitude.sin() * obliquity.sin()).asin();

    if longitude.sin() > 0.0 {
        if alpha.sin() < 0.0 {
            alpha += PI;
        }
    } else if alpha.sin() > 0.0 {
        alpha += PI;
    }

    (alpha, delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn jd_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> JulianDate {
        JulianDate::from_utc(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    #[test]
    fn gmst_at_j2000_is_the_constant_term() {
        assert!((greenwich_mean_sidereal_time(JulianDate::J2000) - 18.697_374_558).abs() < 1e-12);
    }

    #[test]
    fn gmst_stays_within_a_day() {
        for day in 0..400 {
            let jd = JulianDate::J2000 + qtty::Days::new(day as f64 * 1.37);
            let gmst = greenwich_mean_sidereal_time(jd);
            assert!((0.0..24.0).contains(&gmst), "gmst = {gmst}");
        }
    }

    #[test]
    fn obliquity_near_j2000_is_23_44_degrees() {
        let eps = ecliptic_obliquity(JulianDate::J2000).to_degrees();
        assert!((eps - 23.439_279).abs() < 1e-5, "ε = {eps}");
    }

    #[test]
    fn declination_at_solstices() {
        let december = SolarCoordinates::at(jd_at(2023, 12, 22, 3, 27));
        assert!((december.declination_degrees() + 23.436).abs() < 0.01);

        let june = SolarCoordinates::at(jd_at(2023, 6, 21, 14, 57));
        assert!((june.declination_degrees() - 23.436).abs() < 0.01);
    }

    #[test]
    fn declination_near_zero_at_march_equinox() {
        let sun = SolarCoordinates::at(jd_at(2024, 3, 20, 3, 6));
        assert!(sun.declination_degrees().abs() < 0.05);
    }

    #[test]
    fn right_ascension_follows_ecliptic_quadrant() {
        let eps = 23.44_f64.to_radians();
        for deg in [10.0_f64, 100.0, 170.0, 190.0, 260.0, 350.0] {
            let lambda = deg.to_radians();
            let (alpha, _) = equatorial_from_ecliptic(lambda, eps);
            // Same half-plane as λ: sin α and sin λ agree in sign.
            assert_eq!(
                alpha.sin() > 0.0,
                lambda.sin() > 0.0,
                "λ = {deg}°, α = {}°",
                alpha.to_degrees()
            );
            // α stays within a few degrees of λ modulo a full turn.
            let diff = (alpha - lambda).rem_euclid(2.0 * PI);
            let diff = diff.min(2.0 * PI - diff).to_degrees();
            assert!(diff < 3.0, "λ = {deg}°, |α − λ| = {diff}°");
        }
    }

    #[test]
    fn terminator_latitude_is_bounded_at_zero_declination() {
        let sun = SolarCoordinates {
            gmst_hours: 0.0,
            right_ascension: 0.0,
            declination: 0.0,
        };
        assert!((sun.terminator_latitude(0.0).to_degrees() + 90.0).abs() < 1e-9);
        assert!((sun.terminator_latitude(PI).to_degrees() - 90.0).abs() < 1e-9);
        for step in 0..=720 {
            let lon = (-180.0 + step as f64 * 0.5).to_radians();
            let lat = sun.terminator_latitude(lon);
            assert!(lat.is_finite() && lat.abs() <= PI / 2.0);
        }
    }

    #[test]
    fn undefined_latitude_collapses_to_the_equator() {
        let sun = SolarCoordinates {
            gmst_hours: f64::NAN,
            right_ascension: 0.0,
            declination: 0.1,
        };
        assert_eq!(sun.terminator_latitude(0.0), 0.0);
    }
}
