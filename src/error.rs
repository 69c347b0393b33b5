// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types returned by the fallible entry points.

use thiserror::Error;

/// Caller errors rejected by the terminator computation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TerminatorError {
    /// The timestamp is NaN, infinite, or outside chrono's representable range.
    #[error("invalid timestamp: {0} ms since the Unix epoch")]
    InvalidTimestamp(f64),

    /// The longitude sample count is outside `TerminatorConfig::DIVISION_RANGE`.
    #[error("invalid division {0}: expected between 2 and 21600 longitude samples")]
    InvalidDivision(usize),
}

/// Failures of a time-zone lookup.
///
/// [`crate::resolve`] recovers from these locally; [`crate::try_resolve`]
/// hands them to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// The identifier does not name a zone of the compiled tz database.
    #[error("unrecognized time zone: {0:?}")]
    UnrecognizedZone(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            TerminatorError::InvalidDivision(0).to_string(),
            "invalid division 0: expected between 2 and 21600 longitude samples"
        );
        assert!(TerminatorError::InvalidTimestamp(f64::NAN)
            .to_string()
            .contains("NaN"));
        assert_eq!(
            ZoneError::UnrecognizedZone("bogus/zone".into()).to_string(),
            "unrecognized time zone: \"bogus/zone\""
        );
    }
}
