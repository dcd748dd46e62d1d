//! Lookups into raw JSON-shaped dictionaries.
//!
//! Both data producers hand over nested `serde_json::Value` trees. These
//! helpers return `None` for an absent key or a node of the wrong shape,
//! which handlers map to a fallback.

use serde_json::Value;

/// Follow `keys` from `root`, object by object.
///
/// ```
/// use quarry_core::raw::walk;
/// use serde_json::json;
///
/// let v = json!({"a": {"b": {"c": 1}}});
/// assert_eq!(walk(&v, ["a", "b", "c"]), Some(&json!(1)));
/// assert_eq!(walk(&v, ["a", "x"]), None);
/// ```
pub fn walk<'a, I, S>(root: &'a Value, keys: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut head = root;
    for key in keys {
        head = head.as_object()?.get(key.as_ref())?;
    }
    Some(head)
}

/// String field `key` of the object `node`.
pub fn str_field<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.as_object()?.get(key)?.as_str()
}

/// Integer field `key` of the object `node`.
///
/// Floats with an integral value are accepted, since some producers
/// serialize every number as a double.
pub fn int_field(node: &Value, key: &str) -> Option<i64> {
    as_int(node.as_object()?.get(key)?)
}

/// Interpret a JSON number as an integer.
pub fn as_int(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn walk_empty_path_returns_root() {
        let v = json!({"a": 1});
        assert_eq!(walk(&v, Vec::<&str>::new()), Some(&v));
    }

    #[test]
    fn walk_through_non_object_is_none() {
        let v = json!({"a": [1, 2]});
        assert_eq!(walk(&v, ["a", "0"]), None);
    }

    #[test]
    fn int_field_accepts_integral_floats() {
        let v = json!({"damage": 12.0, "frac": 1.5, "s": "3"});
        assert_eq!(int_field(&v, "damage"), Some(12));
        assert_eq!(int_field(&v, "frac"), None);
        assert_eq!(int_field(&v, "s"), None);
        assert_eq!(int_field(&v, "absent"), None);
    }

    #[test]
    fn str_field_rejects_numbers() {
        let v = json!({"type": 5});
        assert_eq!(str_field(&v, "type"), None);
    }
}
