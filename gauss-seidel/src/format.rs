//! Rendering numbers as terms of a human-readable expression.

/// The most decimal digits an f64 can meaningfully show.
pub const MAX_PRECISION: usize = 17;

/// Where a term appears in an expression.
/// Determines how its sign is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// First term of the expression: `-` only when negative, nothing otherwise.
    Leading,
    /// Any later term: ` + ` or ` - ` is written before the magnitude.
    Following,
}

/// Format `value` as a term at the given position.
/// With no precision, the magnitude uses the shortest representation that
/// round-trips. Otherwise it uses fixed notation with that many decimal places.
///
/// ```
/// use gauss_seidel::format::{Position, format_number};
/// assert_eq!(format_number(-0.25, Position::Leading, None), "-0.25");
/// assert_eq!(format_number(-0.25, Position::Following, Some(3)), " - 0.250");
/// assert_eq!(format_number(2.0, Position::Following, None), " + 2");
/// ```
pub fn format_number(value: f64, position: Position, precision: Option<usize>) -> String {
    let magnitude = format_magnitude(value.abs(), precision);
    let negative = value < 0.0;
    match (position, negative) {
        (Position::Leading, false) => magnitude,
        (Position::Leading, true) => format!("-{magnitude}"),
        (Position::Following, false) => format!(" + {magnitude}"),
        (Position::Following, true) => format!(" - {magnitude}"),
    }
}

fn format_magnitude(magnitude: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{magnitude:.digits$}"),
        None => magnitude.to_string(),
    }
}

/// Round `value` to `precision` decimal places. Without a precision, the value is unchanged.
pub fn round(value: f64, precision: Option<usize>) -> f64 {
    let Some(digits) = precision else {
        return value;
    };
    let digits = digits.min(MAX_PRECISION) as i32;
    let scale = 10f64.powi(digits);
    let rounded = (value * scale).round() / scale;
    // Scaling huge values can overflow; those have no fractional part worth rounding anyway.
    if rounded.is_finite() { rounded } else { value }
}
