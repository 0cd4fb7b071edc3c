//! # Validation methods
//! This module exposes the individual predicates which make up entry validation. Each `check_*`
//! function returns the precise reason for a rejection; each `is_*` function is the
//! corresponding boolean test.
//!
//! The predicates are independent of any particular field; the field name is attached when the
//! [`Validator`](crate::Validator) reports an error.
use std::num::IntErrorKind;

use crate::error::NameError;
use crate::value::FieldValue;

/// The earliest accepted publication year.
pub const MIN_YEAR: i32 = 500;

/// How many years past the current year a publication year may lie.
pub const FUTURE_YEARS: i32 = 5;

/// The BibTeX character limit for a single field.
pub const MAX_FIELD_LEN: usize = 5000;

/// Check that a name has the form `First [Middle ...] Surname`, where every part consists only
/// of ASCII letters.
pub fn check_name(name: &str) -> Result<(), NameError> {
    let found = name.split_whitespace().count();
    if found < 2 {
        return Err(NameError::TooFewParts { found });
    }

    match name
        .split_whitespace()
        .find(|part| !part.bytes().all(|b| b.is_ascii_alphabetic()))
    {
        Some(part) => Err(NameError::NonAlphabetic {
            part: part.to_owned(),
        }),
        None => Ok(()),
    }
}

/// Check if a given string is a valid author name.
#[inline]
pub fn is_name(name: &str) -> bool {
    check_name(name).is_ok()
}

/// The inclusive range of accepted years, given the current year.
#[inline]
pub fn year_bounds(current_year: i32) -> (i32, i32) {
    (MIN_YEAR, current_year.saturating_add(FUTURE_YEARS))
}

/// Check that a year lies in `[MIN_YEAR, current_year + FUTURE_YEARS]`.
///
/// On failure, returns the violated bounds.
pub fn check_year(year: i64, current_year: i32) -> Result<i32, (i32, i32)> {
    let (min, max) = year_bounds(current_year);
    match i32::try_from(year) {
        Ok(year) if (min..=max).contains(&year) => Ok(year),
        _ => Err((min, max)),
    }
}

/// Check if a given year is in the accepted range.
#[inline]
pub fn is_year(year: i64, current_year: i32) -> bool {
    check_year(year, current_year).is_ok()
}

/// Coerce a raw value to an integer.
///
/// Integers pass through, strings are trimmed and parsed in base 10, and finite floats are
/// truncated toward zero. Integers too large for an `i64` saturate, so they are still reported
/// as out-of-range years. Returns `None` for every other value.
pub fn coerce_integer(value: &FieldValue) -> Option<i64> {
    match value {
        FieldValue::Int(i) => Some(*i),
        FieldValue::Str(s) => match s.trim().parse::<i64>() {
            Ok(i) => Some(i),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => None,
            },
        },
        // `as` saturates
        FieldValue::Float(f) if f.is_finite() => Some(f.trunc() as i64),
        _ => None,
    }
}

/// Check that a string does not exceed [`MAX_FIELD_LEN`] chars, returning the length on failure.
pub fn check_len(s: &str) -> Result<(), usize> {
    // fast path: the byte length bounds the char count
    if s.len() <= MAX_FIELD_LEN {
        return Ok(());
    }
    let len = s.chars().count();
    if len > MAX_FIELD_LEN { Err(len) } else { Ok(()) }
}

/// Check if a given string is within the BibTeX field limit.
#[inline]
pub fn is_within_len(s: &str) -> bool {
    check_len(s).is_ok()
}
