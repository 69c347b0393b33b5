// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use qtty::*;

use super::instant::Time;
use super::scales::JD;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Days elapsed since J2000.0 (the `n` of the low-precision solar formulas).
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Julian centuries since J2000.0 (used by the obliquity polynomial).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            (self.days_since_j2000() / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_since_j2000() {
        let jd = Time::<JD>::new(2_460_300.64375);
        assert!((jd.days_since_j2000() - Days::new(8_755.64375)).abs() < Days::new(1e-9));
    }

    #[test]
    fn test_julian_centuries() {
        let jd = Time::<JD>::J2000 + Days::new(36_525.0 * 3.0);
        assert!((jd.julian_centuries() - Centuries::new(3.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn test_j2000_is_zero_centuries() {
        assert_eq!(Time::<JD>::J2000.julian_centuries().value(), 0.0);
    }
}
