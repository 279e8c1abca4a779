//! Primitive equality rules.
//!
//! Loose equality follows a fixed, small rule set:
//! - `undefined` and `null` equal each other and nothing else;
//! - a number and a string compare after converting the string to a number;
//! - a boolean compares as `1` or `0`;
//! - everything else must have the same kind and value.
//!
//! Composite values are never coerced.

use crate::value::Value;

/// Strict equality of two primitives: same kind, same value.
///
/// Numbers compare with IEEE-754 `==`, so `NaN` is never equal to itself and
/// `0.0` equals `-0.0`.
pub fn strict_primitive_eq(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

/// Coercive equality of two primitives.
pub fn loose_primitive_eq(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(n), other) | (other, Value::Number(n)) => number_loose_eq(*n, other),
        (Value::Bool(b), other) | (other, Value::Bool(b)) => number_loose_eq(bool_to_number(*b), other),
        _ => false,
    }
}

fn number_loose_eq(n: f64, other: &Value) -> bool {
    match other {
        Value::Number(m) => n == *m,
        Value::String(s) => n == string_to_number(s),
        Value::Bool(b) => n == bool_to_number(*b),
        _ => false,
    }
}

fn bool_to_number(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Whitespace trimmed before numeric conversion: the Unicode `White_Space`
/// set without NEL (U+0085), plus the byte-order mark.
fn is_number_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Converts a string to a number for loose comparison.
///
/// Examples:
/// - `"" -> 0`, `"  12  " -> 12`, `"1e3" -> 1000`, `".5" -> 0.5`
/// - `"0x1f" -> 31`, `"0b101" -> 5`, `"0o17" -> 15`
/// - `"-Infinity" -> -inf`
/// - `"12px"`, `"inf"`, `"nan"`, `"1_000" -> NaN`
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_number_whitespace);
    if s.is_empty() {
        return 0.0;
    }
    if let Some(n) = parse_prefixed_integer(s) {
        return n;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if is_decimal_literal(s) {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Handles `0x`, `0o` and `0b` literals. Returns `None` when `s` has no
/// radix prefix, `Some(NaN)` when the prefix is followed by invalid digits.
fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN);
    Some(value)
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let mut digits = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return false;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == b.len()
}
