//! Shared utility functions for the ginger price dashboard crates.

/// Number and currency formatting for the id-ID locale.
///
/// Matches what a browser produces for `Number.prototype.toLocaleString('id-ID')`:
/// `.` groups thousands, `,` separates the fraction, at most three fraction
/// digits are kept with trailing zeros dropped, and exact ties round away
/// from zero.
pub mod currency {
    /// Default maximum fraction digits used by the id-ID number format.
    pub const DEFAULT_FRACTION_DIGITS: usize = 3;

    /// Format a number with id-ID grouping, e.g. `35000.5` -> `"35.000,5"`.
    pub fn format_number(value: f64, max_fraction_digits: usize) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let fixed = fixed_half_away(value.abs(), max_fraction_digits);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        // Rounding can turn a tiny negative into zero; no "-0".
        if value < 0.0 && (int_part.bytes().any(|b| b != b'0') || !frac_part.is_empty()) {
            out.push('-');
        }
        out.push_str(&group_thousands(int_part));
        if !frac_part.is_empty() {
            out.push(',');
            out.push_str(frac_part);
        }
        out
    }

    /// Format a price in Rupiah, e.g. `35000.0` -> `"Rp 35.000"`.
    pub fn format_rupiah(value: f64) -> String {
        format!("Rp {}", format_number(value, DEFAULT_FRACTION_DIGITS))
    }

    /// `value` (non-negative) with `digits` fraction digits, ties rounded up.
    ///
    /// `{:.N}` rounds ties to even. A double is an exact tie at `digits`
    /// places only when `value * 2^(digits + 1)` is an odd integer, and then
    /// its `digits + 1` place expansion is exact and ends in `5`.
    fn fixed_half_away(value: f64, digits: usize) -> String {
        let doubled = value * 2f64.powi(digits as i32 + 1);
        if doubled.fract() != 0.0 || doubled % 2.0 != 1.0 {
            return format!("{:.*}", digits, value);
        }
        let exact = format!("{:.*}", digits + 1, value);
        increment_last_digit(exact[..exact.len() - 1].trim_end_matches('.'))
    }

    fn increment_last_digit(fixed: &str) -> String {
        let mut bytes = fixed.as_bytes().to_vec();
        let mut carried = true;
        for i in (0..bytes.len()).rev() {
            match bytes[i] {
                b'.' => continue,
                b'9' => bytes[i] = b'0',
                _ => {
                    bytes[i] += 1;
                    carried = false;
                    break;
                }
            }
        }
        let digits = String::from_utf8_lossy(&bytes).into_owned();
        if carried {
            format!("1{}", digits)
        } else {
            digits
        }
    }

    fn group_thousands(digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }
        out
    }

}

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Whether a sequence of "YYYY-MM-DD" dates is in non-decreasing order.
    ///
    /// Fails if any entry does not parse.
    pub fn is_chronological<S: AsRef<str>>(dates: &[S]) -> anyhow::Result<bool> {
        let mut previous: Option<NaiveDate> = None;
        for raw in dates {
            let date = parse_date(raw.as_ref())?;
            if previous.is_some_and(|p| p > date) {
                return Ok(false);
            }
            previous = Some(date);
        }
        Ok(true)
    }

}
