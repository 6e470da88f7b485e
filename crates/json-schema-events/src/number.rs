//! JSON numbers as delivered by the event sources.

use std::cmp::Ordering;
use std::fmt;

/// A JSON number, split into the three variants an event source can deliver.
///
/// Integers that fit in `i64` are `Int`, larger non-negative integers are
/// `Uint`, everything else is `Float`. Comparison is exact between the two
/// integer variants and falls back to `f64` when a float is involved.
#[derive(Debug, Clone, Copy)]
pub enum JsonNumber {
    /// Signed integer
    Int(i64),
    /// Unsigned integer above `i64::MAX`
    Uint(u64),
    /// Floating point value
    Float(f64),
}

impl JsonNumber {
    /// True for the two integer variants.
    pub fn is_integer(&self) -> bool {
        !matches!(self, JsonNumber::Float(_))
    }

    /// True if the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            JsonNumber::Int(i) => *i < 0,
            JsonNumber::Uint(_) => false,
            JsonNumber::Float(f) => *f < 0.0,
        }
    }

    /// True if the value is strictly above zero.
    pub fn is_positive(&self) -> bool {
        match self {
            JsonNumber::Int(i) => *i > 0,
            JsonNumber::Uint(u) => *u > 0,
            JsonNumber::Float(f) => *f > 0.0,
        }
    }

    /// The value as `u64`, for non-negative integers only.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            JsonNumber::Int(i) => u64::try_from(*i).ok(),
            JsonNumber::Uint(u) => Some(*u),
            JsonNumber::Float(_) => None,
        }
    }

    /// The value as `f64` (lossy for very large integers).
    pub fn as_f64(&self) -> f64 {
        match self {
            JsonNumber::Int(i) => *i as f64,
            JsonNumber::Uint(u) => *u as f64,
            JsonNumber::Float(f) => *f,
        }
    }

    fn as_i128(&self) -> Option<i128> {
        match self {
            JsonNumber::Int(i) => Some(i128::from(*i)),
            JsonNumber::Uint(u) => Some(i128::from(*u)),
            JsonNumber::Float(_) => None,
        }
    }
}

impl PartialEq for JsonNumber {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for JsonNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.as_i128(), other.as_i128()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonNumber::Int(i) => write!(f, "{}", i),
            JsonNumber::Uint(u) => write!(f, "{}", u),
            JsonNumber::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<i64> for JsonNumber {
    fn from(value: i64) -> Self {
        JsonNumber::Int(value)
    }
}

impl From<u64> for JsonNumber {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => JsonNumber::Int(i),
            Err(_) => JsonNumber::Uint(value),
        }
    }
}

impl From<f64> for JsonNumber {
    fn from(value: f64) -> Self {
        JsonNumber::Float(value)
    }
}

impl From<&serde_json::Number> for JsonNumber {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            JsonNumber::Int(i)
        } else if let Some(u) = n.as_u64() {
            JsonNumber::Uint(u)
        } else {
            JsonNumber::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

/// Non-finite floats have no JSON form and become `null`.
impl From<JsonNumber> for serde_json::Value {
    fn from(n: JsonNumber) -> Self {
        match n {
            JsonNumber::Int(i) => serde_json::Value::from(i),
            JsonNumber::Uint(u) => serde_json::Value::from(u),
            JsonNumber::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_json_value() {
        assert_eq!(serde_json::Value::from(JsonNumber::Int(-4)), serde_json::json!(-4));
        assert_eq!(
            serde_json::Value::from(JsonNumber::Float(f64::INFINITY)),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_integer_variants_compare_exactly() {
        assert_eq!(JsonNumber::Int(5), JsonNumber::Uint(5));
        assert!(JsonNumber::Int(-1) < JsonNumber::Uint(u64::MAX));
        assert!(JsonNumber::Uint(u64::MAX) > JsonNumber::Int(i64::MAX));
    }

    #[test]
    fn test_float_comparison() {
        assert!(JsonNumber::Float(1.5) > JsonNumber::Int(1));
        assert_eq!(JsonNumber::Float(2.0), JsonNumber::Int(2));
        assert_eq!(
            JsonNumber::Float(f64::NAN).partial_cmp(&JsonNumber::Int(0)),
            None
        );
    }

    #[test]
    fn test_sign_helpers() {
        assert!(JsonNumber::Int(-3).is_negative());
        assert!(!JsonNumber::Uint(0).is_positive());
        assert!(JsonNumber::Float(0.5).is_positive());
        assert!(!JsonNumber::Float(0.5).is_integer());
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(JsonNumber::Int(7).as_u64(), Some(7));
        assert_eq!(JsonNumber::Int(-7).as_u64(), None);
        assert_eq!(JsonNumber::Float(7.0).as_u64(), None);
    }

    #[test]
    fn test_from_serde_number() {
        let n = serde_json::Number::from(u64::MAX);
        assert!(matches!(JsonNumber::from(&n), JsonNumber::Uint(u64::MAX)));

        let n = serde_json::Number::from_f64(2.5).unwrap();
        assert!(matches!(JsonNumber::from(&n), JsonNumber::Float(_)));
    }
}
