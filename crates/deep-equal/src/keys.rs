//! Own-key enumeration order for objects.
//!
//! Keys that read as array indices come first in ascending numeric order, the
//! rest follow in insertion order.

const MAX_ARRAY_INDEX: u64 = u32::MAX as u64 - 1;

/// Returns the numeric value of `key` if it is a canonical array index.
///
/// Examples:
/// - `"0" -> Some(0)`
/// - `"42" -> Some(42)`
/// - `"042"`, `"-1"`, `"1.0"`, `"4294967295" -> None`
pub fn array_index(key: &str) -> Option<u32> {
    let bytes = key.as_bytes();
    if bytes.is_empty() || bytes.len() > 10 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    let n: u64 = key.parse().ok()?;
    if n > MAX_ARRAY_INDEX {
        return None;
    }
    u32::try_from(n).ok()
}

/// Orders keys the way own-key enumeration does.
pub fn own_keys<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut indices: Vec<(u32, &'a str)> = Vec::new();
    let mut names: Vec<&'a str> = Vec::new();
    for key in keys {
        match array_index(key) {
            Some(idx) => indices.push((idx, key)),
            None => names.push(key),
        }
    }
    if indices.is_empty() {
        return names;
    }
    indices.sort_unstable_by_key(|(idx, _)| *idx);
    let mut out = Vec::with_capacity(indices.len() + names.len());
    out.extend(indices.into_iter().map(|(_, key)| key));
    out.extend(names);
    out
}
