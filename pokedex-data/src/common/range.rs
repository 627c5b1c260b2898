use std::fmt::{
    self,
    Display,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A value that can be the bound of a [`Range`].
pub trait RangeValue: Copy + PartialEq + Eq + PartialOrd + Ord + Display {}
impl<I> RangeValue for I where I: Copy + PartialEq + Eq + PartialOrd + Ord + Display {}

/// An error for constructing a range whose start exceeds its end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("range start {min} exceeds range end {max}")]
pub struct InvalidRangeError {
    min: String,
    max: String,
}

/// A closed range of values, `[min, max]`.
///
/// A range can never be inverted: construction and deserialization both reject `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range<I> {
    min: I,
    max: I,
}

impl<I> Range<I>
where
    I: RangeValue,
{
    /// Creates a new range.
    ///
    /// Panics if `min > max`.
    pub fn new(min: I, max: I) -> Self {
        assert!(min <= max, "range start exceeds range end");
        Self { min, max }
    }

    /// Creates a new range, failing if `min > max`.
    pub fn try_new(min: I, max: I) -> Result<Self, InvalidRangeError> {
        if min > max {
            return Err(InvalidRangeError {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    /// The start of the range.
    pub fn min(&self) -> I {
        self.min
    }

    /// The end of the range (inclusive).
    pub fn max(&self) -> I {
        self.max
    }

    /// Checks if a value is in range.
    pub fn contains(&self, v: I) -> bool {
        v >= self.min && v <= self.max
    }

    /// Maps the bounds of the range to values of a different type.
    ///
    /// `f` must be monotonic for the result to be a valid range.
    pub fn map<F, T>(&self, f: F) -> Range<T>
    where
        F: Fn(I) -> T,
        T: RangeValue,
    {
        Range::new(f(self.min), f(self.max))
    }
}

impl<I> From<I> for Range<I>
where
    I: RangeValue,
{
    fn from(value: I) -> Self {
        Self::new(value, value)
    }
}

impl<I> Display for Range<I>
where
    I: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.min, self.max)
    }
}

impl<'de, I> Deserialize<'de> for Range<I>
where
    I: RangeValue + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Bounds<I> {
            min: I,
            max: I,
        }

        let bounds = Bounds::<I>::deserialize(deserializer)?;
        Self::try_new(bounds.min, bounds.max).map_err(serde::de::Error::custom)
    }
}
