//! Number formatting used by the response shapes.
//!
//! Both helpers round on the exact binary value of the `f64`, with ties going
//! away from zero for fixed-point output and toward positive infinity for
//! integer rounding.

/// Enough fractional digits to print any f64 at or above 2^-62 exactly.
/// Smaller magnitudes can never reach a rounding boundary at the precisions
/// used here.
const EXACT_DIGITS: usize = 80;

/// Formats `value` with exactly `digits` fractional digits.
///
/// Ties on the exact value round away from zero (`0.125` → `"0.13"`), while
/// values that merely print like a tie round by their true value
/// (`1.005` → `"1.00"`). Negative zero formats as `"0.00"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value < 0.0;
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut buf: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|next| *next >= b'5');

    if round_up {
        let mut carry = true;
        for digit in buf.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            buf.insert(0, b'1');
        }
    }

    let split = buf.len() - digits;
    let mut out = String::with_capacity(buf.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(buf[..split].iter().map(|b| *b as char));
    if digits > 0 {
        out.push('.');
        out.extend(buf[split..].iter().map(|b| *b as char));
    }
    out
}

/// Rounds to the nearest integer; `x.5` goes up, so `-2.5` becomes `-2`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
