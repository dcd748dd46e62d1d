//! Bounded integer space.

use quarry_core::ObsValue;

use crate::error::SpaceError;

/// An integer in the closed interval `[low, high]` with a fixed default.
///
/// # Examples
///
/// ```
/// use quarry_space::BoundedInt;
///
/// let space = BoundedInt::new(-1, 1562, 0).unwrap();
/// assert!(space.contains(1561));
/// assert!(!space.contains(1563));
/// assert!(BoundedInt::new(5, 1, 3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundedInt {
    low: i64,
    high: i64,
    default: i64,
}

impl BoundedInt {
    /// Create a space over `[low, high]`.
    ///
    /// Returns `Err(SpaceError::InvertedRange)` if `low > high`, or
    /// `Err(SpaceError::OutOfRange)` if `default` is outside the range.
    pub fn new(low: i64, high: i64, default: i64) -> Result<Self, SpaceError> {
        if low > high {
            return Err(SpaceError::InvertedRange { low, high });
        }
        if default < low || default > high {
            return Err(SpaceError::OutOfRange {
                value: default,
                low,
                high,
            });
        }
        Ok(Self { low, high, default })
    }

    /// Lower bound (inclusive).
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Upper bound (inclusive).
    pub fn high(&self) -> i64 {
        self.high
    }

    /// The default value.
    pub fn default_int(&self) -> i64 {
        self.default
    }

    /// Returns `true` if `value` lies in `[low, high]`.
    pub fn contains(&self, value: i64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Encode an in-range integer as an [`ObsValue::Int`].
    pub fn encode(&self, value: i64) -> Result<ObsValue, SpaceError> {
        if !self.contains(value) {
            return Err(SpaceError::OutOfRange {
                value,
                low: self.low,
                high: self.high,
            });
        }
        Ok(ObsValue::Int(value))
    }

    /// The default as an [`ObsValue::Int`].
    pub fn default_value(&self) -> ObsValue {
        ObsValue::Int(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_outside_range_rejected() {
        assert_eq!(
            BoundedInt::new(0, 10, 11).unwrap_err(),
            SpaceError::OutOfRange {
                value: 11,
                low: 0,
                high: 10
            }
        );
    }

    #[test]
    fn single_point_range() {
        let s = BoundedInt::new(4, 4, 4).unwrap();
        assert_eq!(s.encode(4).unwrap(), ObsValue::Int(4));
        assert!(s.encode(3).is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        let s = BoundedInt::new(-1, 1562, 0).unwrap();
        assert!(s.contains(-1));
        assert!(s.contains(1562));
        assert!(!s.contains(-2));
        assert_eq!(s.default_value(), ObsValue::Int(0));
    }
}
