//! Compact time codes and day-length arithmetic
//!
//! The upstream API encodes sunrise and sunset as bare integers in "hmm" or
//! "hhmm" form: hours 1-9 come as 3 digits, hours 10-23 as 4. Digit count,
//! not numeric value, decides where the hour ends.

use crate::error::ForecastError;

/// Convert a compact time code into a clock string
///
/// A 3-digit code "Hmm" becomes "H:mm", a 4-digit code "HHmm" becomes
/// "HH:mm". Any other digit count fails with
/// [`ForecastError::InvalidTimeFormat`] carrying the offending value.
pub fn convert_time(code: u32) -> Result<String, ForecastError> {
    let digits = code.to_string();
    match digits.len() {
        3 => Ok(format!("{}:{}", &digits[..1], &digits[1..])),
        4 => Ok(format!("{}:{}", &digits[..2], &digits[2..])),
        _ => Err(ForecastError::InvalidTimeFormat { value: digits }),
    }
}

/// Elapsed time between two clock strings
///
/// Both inputs are "H:mm" or "HH:mm". With `formatted` unset the result reads
/// "13 h 30 min", with it set "13:30" (minutes are not zero-padded). The
/// difference is raw subtraction in minutes: a sunset numerically before the
/// sunrise yields a negative duration, with no day-wraparound correction.
pub fn day_duration(
    sunrise: &str,
    sunset: &str,
    formatted: bool,
) -> Result<String, ForecastError> {
    let delta = clock_minutes(sunset)? - clock_minutes(sunrise)?;

    // Hours floor toward negative infinity, minutes keep the dividend's sign.
    let hours = delta.div_euclid(60);
    let minutes = delta % 60;

    Ok(if formatted {
        format!("{hours}:{minutes}")
    } else {
        format!("{hours} h {minutes} min")
    })
}

/// Parse "H:mm"/"HH:mm" into minutes since midnight
fn clock_minutes(clock: &str) -> Result<i64, ForecastError> {
    let invalid = || ForecastError::InvalidTimeFormat {
        value: clock.to_string(),
    };

    let (hours, minutes) = clock.split_once(':').ok_or_else(invalid)?;
    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;

    Ok(hours * 60 + minutes)
}
