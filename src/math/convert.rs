use core::fmt;
use core::str::FromStr;

use crate::math::{Vector, VectorError};

/// Number of decimals used by [`Vector::to_fixed_default`].
pub const DEFAULT_FIXED_PRECISION: usize = 8;

/// Largest precision honoured by [`Vector::to_fixed`]; larger requests are clamped.
pub const MAX_FIXED_PRECISION: usize = 100;

// Every finite f64 has at most 1074 fractional decimal digits, so formatting
// with this many digits is exact.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Plain `{x, y}` snapshot of a vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// Axes rendered as decimal strings with a fixed number of decimals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedCoordinates {
    pub x: String,
    pub y: String,
}

impl Vector {
    /// Formats both axes with `precision` digits after the decimal point.
    ///
    /// ```
    /// use vec2_lite_rs::math::Vector;
    ///
    /// let fixed = Vector::new(1.0, -0.125).to_fixed(2);
    /// assert_eq!(fixed.x, "1.00");
    /// assert_eq!(fixed.y, "-0.13");
    /// ```
    ///
    /// The last digit is rounded from the exact binary value, with halfway
    /// cases going away from zero: `2.5` gives `"3"` and `0.125` gives
    /// `"0.13"` at two digits. `1.005` is stored slightly below the half and
    /// gives `"1.00"`. Precision is clamped to [`MAX_FIXED_PRECISION`].
    pub fn to_fixed(self, precision: usize) -> FixedCoordinates {
        let precision = precision.min(MAX_FIXED_PRECISION);
        FixedCoordinates {
            x: format_fixed(self.x, precision),
            y: format_fixed(self.y, precision),
        }
    }

    #[inline]
    pub fn to_fixed_default(self) -> FixedCoordinates {
        self.to_fixed(DEFAULT_FIXED_PRECISION)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn to_object(self) -> Coordinates {
        Coordinates {
            x: self.x,
            y: self.y,
        }
    }
}

fn format_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((int_part, frac_part)) = exact.split_once('.') else {
        return exact;
    };

    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(precision)).collect();
    // Exact expansion: a dropped digit of 5 or more means at or past the half.
    if frac_part.as_bytes()[precision] >= b'5' {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    if precision > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    out
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    /// Parses the `"x: <x>, y: <y>"` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || VectorError::MalformedString(s.to_owned());

        let (x_part, y_part) = s.split_once(',').ok_or_else(malformed)?;
        let x = parse_axis('x', x_part).ok_or_else(malformed)??;
        let y = parse_axis('y', y_part).ok_or_else(malformed)??;

        Ok(Self::new(x, y))
    }
}

// Outer `None` means the `<axis>:` label is missing.
fn parse_axis(axis: char, part: &str) -> Option<Result<f64, VectorError>> {
    let rest = part.trim().strip_prefix(axis)?.trim_start().strip_prefix(':')?;
    let value = rest.trim();
    Some(value.parse::<f64>().map_err(|_| VectorError::InvalidNumber {
        axis,
        value: value.to_owned(),
    }))
}

impl From<[f64; 2]> for Vector {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for [f64; 2] {
    #[inline]
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for (f64, f64) {
    #[inline]
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

impl From<Coordinates> for Vector {
    #[inline]
    fn from(c: Coordinates) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<Vector> for Coordinates {
    #[inline]
    fn from(v: Vector) -> Self {
        v.to_object()
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(VectorError::InvalidLength { len: values.len() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        assert_eq!(Vector::new(1.0, -2.5).to_string(), "x: 1, y: -2.5");
        assert_eq!(Vector::new(0.1, 100.0).to_string(), "x: 0.1, y: 100");
    }

    #[test]
    fn to_fixed_pads_and_does_not_mutate() {
        let v = Vector::new(1.0, 2.0 / 3.0);
        let fixed = v.to_fixed_default();
        assert_eq!(fixed.x, "1.00000000");
        assert_eq!(fixed.y, "0.66666667");
        assert_eq!(v, Vector::new(1.0, 2.0 / 3.0));

        let fixed = v.to_fixed(0);
        assert_eq!(fixed.x, "1");
        assert_eq!(fixed.y, "1");
    }

    #[test]
    fn to_fixed_rounds_halves_away_from_zero() {
        let fixed = Vector::new(0.5, 2.5).to_fixed(0);
        assert_eq!((fixed.x.as_str(), fixed.y.as_str()), ("1", "3"));

        let fixed = Vector::new(0.125, -2.5).to_fixed(2);
        assert_eq!((fixed.x.as_str(), fixed.y.as_str()), ("0.13", "-2.50"));

        let fixed = Vector::new(-2.5, -0.125).to_fixed(0);
        assert_eq!((fixed.x.as_str(), fixed.y.as_str()), ("-3", "-0"));

        // 1.005 is stored as 1.00499999999999989...
        let fixed = Vector::new(1.005, 0.0).to_fixed(2);
        assert_eq!((fixed.x.as_str(), fixed.y.as_str()), ("1.00", "0.00"));
    }

    #[test]
    fn to_fixed_carries_into_integer_part() {
        let fixed = Vector::new(9.5, 99.5).to_fixed(0);
        assert_eq!((fixed.x.as_str(), fixed.y.as_str()), ("10", "100"));

        let fixed = Vector::new(-0.999, 0.0).to_fixed(2);
        assert_eq!(fixed.x, "-1.00");

        let fixed = Vector::new(-0.001, -0.0).to_fixed(2);
        assert_eq!((fixed.x.as_str(), fixed.y.as_str()), ("-0.00", "0.00"));
    }

    #[test]
    fn to_fixed_clamps_precision_and_passes_non_finite() {
        let fixed = Vector::new(1.0, 0.1).to_fixed(10_000);
        assert_eq!(fixed.x.len(), 2 + MAX_FIXED_PRECISION);
        assert_eq!(fixed.y.len(), 2 + MAX_FIXED_PRECISION);
        assert!(fixed.y.starts_with("0.1000000000000000055511151231257827"));

        let fixed = Vector::new(f64::INFINITY, f64::NAN).to_fixed(2);
        assert_eq!((fixed.x.as_str(), fixed.y.as_str()), ("inf", "NaN"));
    }

    #[test]
    fn array_and_object_snapshots() {
        let v = Vector::new(3.0, -4.0);
        assert_eq!(v.to_array(), [3.0, -4.0]);
        assert_eq!(v.to_object(), Coordinates { x: 3.0, y: -4.0 });

        let arr: [f64; 2] = v.into();
        let tuple: (f64, f64) = v.into();
        assert_eq!(arr, [3.0, -4.0]);
        assert_eq!(tuple, (3.0, -4.0));
        assert_eq!(Vector::from(tuple), v);
        assert_eq!(Vector::from(Coordinates { x: 3.0, y: -4.0 }), v);
    }

    #[test]
    fn try_from_slice_checks_length() {
        let ok = Vector::try_from(&[1.0_f64, 2.0][..]);
        assert_eq!(ok, Ok(Vector::new(1.0, 2.0)));

        let short = Vector::try_from(&[1.0_f64][..]);
        assert_eq!(short, Err(VectorError::InvalidLength { len: 1 }));

        let long = Vector::try_from(&[1.0_f64, 2.0, 3.0][..]);
        assert_eq!(long, Err(VectorError::InvalidLength { len: 3 }));
    }

    #[test]
    fn parse_accepts_display_output() {
        let v: Vector = "x: 1.5, y: -2".parse().unwrap();
        assert_eq!(v, Vector::new(1.5, -2.0));

        let v: Vector = "  x:3 ,y:   4  ".parse().unwrap();
        assert_eq!(v, Vector::new(3.0, 4.0));

        let v: Vector = "x: inf, y: -inf".parse().unwrap();
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "1, 2".parse::<Vector>(),
            Err(VectorError::MalformedString("1, 2".to_owned()))
        );
        assert_eq!(
            "y: 1, x: 2".parse::<Vector>(),
            Err(VectorError::MalformedString("y: 1, x: 2".to_owned()))
        );
        assert_eq!(
            "x: 1 y: 2".parse::<Vector>(),
            Err(VectorError::MalformedString("x: 1 y: 2".to_owned()))
        );
        assert_eq!(
            "x: one, y: 2".parse::<Vector>(),
            Err(VectorError::InvalidNumber {
                axis: 'x',
                value: "one".to_owned()
            })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            VectorError::InvalidLength { len: 3 }.to_string(),
            "expected exactly 2 components, got 3"
        );
        assert_eq!(
            VectorError::InvalidNumber {
                axis: 'y',
                value: "?".to_owned()
            }
            .to_string(),
            "invalid number \"?\" for axis y"
        );
    }
}
