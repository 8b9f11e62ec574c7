//! Numeral-style number patterns.
//!
//! Supported shapes: `0`, `0,0`, `0.00`, `0,0.0`. A `,` in the integer part
//! turns on thousands grouping; the count of zeros after `.` fixes the
//! decimal places. Halves round toward positive infinity (`-2.5` → `-2`).

use std::str::FromStr;

use crate::error::FormatError;

const MAX_DECIMALS: u8 = 10;

/// A parsed number pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberPattern {
    pub grouping: bool,
    pub decimals: u8,
}

impl FromStr for NumberPattern {
    type Err = FormatError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        let unsupported = || FormatError::UnsupportedNumberPattern(pattern.to_string());

        let (integer, fraction) = match pattern.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (pattern, None),
        };

        let integer_ok = integer.contains('0')
            && integer.chars().all(|ch| ch == '0' || ch == ',')
            && !integer.starts_with(',')
            && !integer.ends_with(',');
        if !integer_ok {
            return Err(unsupported());
        }

        let decimals = match fraction {
            None => 0,
            Some(fraction) if !fraction.is_empty() && fraction.chars().all(|ch| ch == '0') => {
                u8::try_from(fraction.len())
                    .ok()
                    .filter(|count| *count <= MAX_DECIMALS)
                    .ok_or_else(unsupported)?
            }
            Some(_) => return Err(unsupported()),
        };

        Ok(Self {
            grouping: integer.contains(','),
            decimals,
        })
    }
}

impl NumberPattern {
    /// Render `value` with this pattern.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let factor = 10f64.powi(i32::from(self.decimals));
        let rounded = (value * factor + 0.5).floor() / factor;
        let magnitude = rounded.abs();
        let digits = format!("{magnitude:.prec$}", prec = usize::from(self.decimals));

        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if rounded < 0.0 {
            out.push('-');
        }
        if self.grouping {
            push_grouped(&mut out, integer);
        } else {
            out.push_str(integer);
        }
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
}

/// Parse `pattern` and render `value` with it.
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedNumberPattern`] when the pattern is not
/// one of the supported shapes.
pub fn format_number(value: f64, pattern: &str) -> Result<String, FormatError> {
    Ok(pattern.parse::<NumberPattern>()?.format(value))
}
