//! deep-equal - Recursive deep equality for JSON-like values.
//!
//! Provides [`is_deep_equal`] for comparing two [`Value`] trees in one of two
//! modes:
//!
//! - strict: kinds must match and primitives compare by value;
//! - loose: primitives are coerced (`1 == "1"`, `null == undefined`) and
//!   object keys holding `undefined` count as absent.
//!
//! Object keys are compared as an ordered list, so field order matters.
//!
//! ```
//! use deep_equal::{deep_equal, deep_equal_loose, Object, Value};
//!
//! let a = Value::from(Object::from([("a", Value::from(1)), ("b", Value::Undefined)]));
//! let b = Value::from(Object::from([("a", 1)]));
//!
//! assert!(!deep_equal(&a, &b));
//! assert!(deep_equal_loose(&a, &b));
//! ```

mod coerce;
mod deep_equal;
mod error;
mod keys;
mod value;

pub use coerce::string_to_number;
pub use deep_equal::{
    deep_equal, deep_equal_json, deep_equal_loose, deep_equal_with, is_deep_equal, Strictness,
};
pub use error::ValueError;
pub use keys::array_index;
pub use value::{Kind, Object, Value};
