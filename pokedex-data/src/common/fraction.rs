use std::{
    cmp,
    fmt::{
        self,
        Display,
    },
    ops::{
        Add,
        Div,
        Mul,
    },
    str::FromStr,
};

use anyhow::{
    Context,
    Error,
};
use num::Integer;
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        Unexpected,
        Visitor,
    },
};

/// An exact, non-negative rational number.
///
/// Used for type effectiveness multipliers and unit conversions, where floating point error would
/// make bucketing and equality checks unreliable.
///
/// A fraction is serializable as:
/// - An integer (`2`), which represents a whole number (denominator == 1).
/// - A fraction string (`"1/4"`).
/// - A two-length array (`[1,4]`).
/// - A floating point number (`0.5`), which is converted to a fraction out of 4096.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    num: u32,
    den: u32,
}

impl Fraction {
    /// Zero.
    pub const ZERO: Fraction = Fraction { num: 0, den: 1 };
    /// One.
    pub const ONE: Fraction = Fraction { num: 1, den: 1 };

    /// Creates a new fraction.
    pub const fn new(n: u32, d: u32) -> Fraction {
        assert!(d != 0, "fraction denominator is zero");
        Fraction { num: n, den: d }
    }

    /// Is the fraction zero?
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Simplifies the fraction.
    pub fn simplify(&self) -> Fraction {
        let gcd = self.num.gcd(&self.den);
        Fraction::new(self.num / gcd, self.den / gcd)
    }

    /// Returns the integer part of the fraction, as if performing integer division.
    pub fn floor(&self) -> u32 {
        self.num / self.den
    }

    /// Multiplies an integer by the fraction, truncating the result.
    pub fn mul_floor(&self, value: u32) -> u32 {
        (value as u64 * self.num as u64 / self.den as u64) as u32
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simplified = self.simplify();
        if simplified.den == 1 {
            write!(f, "{}", simplified.num)
        } else {
            write!(f, "{}/{}", simplified.num, simplified.den)
        }
    }
}

impl From<u32> for Fraction {
    fn from(value: u32) -> Self {
        Self::new(value, 1)
    }
}

impl From<f64> for Fraction {
    fn from(value: f64) -> Self {
        Self::new((value * 4096f64).trunc() as u32, 4096).simplify()
    }
}

impl FromStr for Fraction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((n, d)) => {
                let n = n
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid numerator: {n}"))?;
                let d: u32 = d
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid denominator: {d}"))?;
                if d == 0 {
                    return Err(Error::msg("fraction denominator is zero"));
                }
                Ok(Self::new(n, d))
            }
            None => Ok(Self::from(
                s.trim()
                    .parse::<u32>()
                    .with_context(|| format!("invalid integer: {s}"))?,
            )),
        }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == cmp::Ordering::Equal
    }
}

impl Eq for Fraction {}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        let lhs = self.num as u64 * other.den as u64;
        let rhs = other.num as u64 * self.den as u64;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Mul for Fraction {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.num * rhs.num, self.den * rhs.den).simplify()
    }
}

impl Mul<u32> for Fraction {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self::Output {
        Self::new(self.num * rhs, self.den).simplify()
    }
}

impl Add<u32> for Fraction {
    type Output = Self;
    fn add(self, rhs: u32) -> Self::Output {
        Self::new(self.num + rhs * self.den, self.den).simplify()
    }
}

impl Div<u32> for Fraction {
    type Output = Self;
    fn div(self, rhs: u32) -> Self::Output {
        Self::new(self.num, self.den * rhs).simplify()
    }
}

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let simplified = self.simplify();
        if simplified.den == 1 {
            serializer.serialize_u32(simplified.num)
        } else {
            serializer.serialize_str(&format!("{simplified}"))
        }
    }
}

struct FractionVisitor;

impl<'de> Visitor<'de> for FractionVisitor {
    type Value = Fraction;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "a non-negative integer, a fraction string, or an array of 2 integers"
        )
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u32::try_from(v)
            .map(Self::Value::from)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u32::try_from(v)
            .map(Self::Value::from)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v < 0f64 || !v.is_finite() {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        Ok(Self::Value::from(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let num = match seq.next_element()? {
            Some(v) => v,
            None => return Err(serde::de::Error::invalid_length(0, &self)),
        };
        let den: u32 = match seq.next_element()? {
            Some(v) => v,
            None => return Err(serde::de::Error::invalid_length(1, &self)),
        };
        if seq.next_element::<u32>()?.is_some() {
            return Err(serde::de::Error::invalid_length(3, &self));
        }
        if den == 0 {
            return Err(serde::de::Error::invalid_value(
                Unexpected::Unsigned(0),
                &self,
            ));
        }
        Ok(Self::Value::new(num, den))
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(FractionVisitor)
    }
}
