use crate::coerce::{loose_primitive_eq, strict_primitive_eq};
use crate::value::{Object, Value};

static UNDEFINED: Value = Value::Undefined;

/// Comparison mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strictness {
    /// Kinds must match and primitives compare by value.
    #[default]
    Strict,
    /// Primitives are coerced before comparing and object keys holding
    /// `undefined` are treated as absent.
    Loose,
}

impl Strictness {
    pub fn is_strict(self) -> bool {
        matches!(self, Strictness::Strict)
    }
}

impl From<bool> for Strictness {
    fn from(strict: bool) -> Self {
        if strict {
            Strictness::Strict
        } else {
            Strictness::Loose
        }
    }
}

/// Deep equality with the mode given as a flag; `true` is strict.
///
/// # Examples
///
/// ```
/// use deep_equal::{is_deep_equal, Value};
///
/// let a = Value::from(1);
/// let b = Value::from("1");
///
/// assert!(!is_deep_equal(&a, &b, true));
/// assert!(is_deep_equal(&a, &b, false));
/// ```
pub fn is_deep_equal(x: &Value, y: &Value, strict: bool) -> bool {
    deep_equal_with(x, y, Strictness::from(strict))
}

/// Strict deep equality.
pub fn deep_equal(x: &Value, y: &Value) -> bool {
    deep_equal_with(x, y, Strictness::Strict)
}

/// Loose deep equality.
pub fn deep_equal_loose(x: &Value, y: &Value) -> bool {
    deep_equal_with(x, y, Strictness::Loose)
}

/// Compares two serde_json values after converting them to [`Value`].
pub fn deep_equal_json(x: &serde_json::Value, y: &serde_json::Value, mode: Strictness) -> bool {
    deep_equal_with(&Value::from(x), &Value::from(y), mode)
}

/// Deep equality under the given mode.
///
/// Arrays compare element by element. Objects compare their key lists first,
/// as ordered arrays, then the value under each key; two objects holding the
/// same fields in a different enumeration order are unequal.
///
/// The strict gate compares [`Kind`](crate::Kind) rather than the coarser
/// `type_of` name. Null, array and object share the name `"object"`, but any
/// pair of them is unequal further down, so the outcome is the same.
pub fn deep_equal_with(x: &Value, y: &Value, mode: Strictness) -> bool {
    let strict = mode.is_strict();
    if strict && x.kind() != y.kind() {
        return false;
    }

    match (x, y) {
        (Value::Array(a), Value::Array(b)) => array_equal(a, b, mode),
        (Value::Object(a), Value::Object(b)) => object_equal(a, b, mode),
        _ if x.is_primitive() && y.is_primitive() => {
            if strict {
                strict_primitive_eq(x, y)
            } else {
                loose_primitive_eq(x, y)
            }
        }
        // Array vs object, or primitive vs composite.
        _ => false,
    }
}

fn array_equal(a: &[Value], b: &[Value], mode: Strictness) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| deep_equal_with(x, y, mode))
}

fn object_equal(a: &Object, b: &Object, mode: Strictness) -> bool {
    let (keys_a, keys_b) = match mode {
        Strictness::Strict => (a.keys(), b.keys()),
        Strictness::Loose => (a.defined_keys(), b.defined_keys()),
    };

    if !array_equal(&key_list(&keys_a), &key_list(&keys_b), mode) {
        return false;
    }

    keys_a.iter().all(|&key| {
        let va = a.get(key).unwrap_or(&UNDEFINED);
        let vb = b.get(key).unwrap_or(&UNDEFINED);
        deep_equal_with(va, vb, mode)
    })
}

fn key_list(keys: &[&str]) -> Vec<Value> {
    keys.iter().copied().map(Value::from).collect()
}
