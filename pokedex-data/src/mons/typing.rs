use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::Type;

/// An error for a type combination that is not one or two distinct types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTypingError {
    #[error("expected 1 or 2 types, found {0}")]
    Count(usize),
    #[error("type {0} appears more than once")]
    Duplicate(Type),
}

/// The type combination of a species: one primary type and an optional, distinct secondary type.
///
/// Serialized as a list of type tags in slot order, `["grass", "poison"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Type>", into = "Vec<Type>")]
pub struct Typing {
    primary: Type,
    secondary: Option<Type>,
}

impl Typing {
    /// A single-type combination.
    pub fn single(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// A dual-type combination.
    ///
    /// Panics if both types are the same.
    pub fn dual(primary: Type, secondary: Type) -> Self {
        assert_ne!(primary, secondary, "dual typing repeats {primary}");
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Iterates over all types, in slot order.
    pub fn types(&self) -> impl Iterator<Item = Type> + use<> {
        [Some(self.primary), self.secondary].into_iter().flatten()
    }

    /// The number of types (1 or 2).
    pub fn len(&self) -> usize {
        if self.secondary.is_some() { 2 } else { 1 }
    }

    /// Checks if the combination includes the given type.
    pub fn contains(&self, typ: Type) -> bool {
        self.primary == typ || self.secondary == Some(typ)
    }
}

impl From<Type> for Typing {
    fn from(value: Type) -> Self {
        Self::single(value)
    }
}

impl TryFrom<&[Type]> for Typing {
    type Error = InvalidTypingError;
    fn try_from(value: &[Type]) -> Result<Self, Self::Error> {
        match *value {
            [primary] => Ok(Self::single(primary)),
            [primary, secondary] if primary == secondary => {
                Err(InvalidTypingError::Duplicate(primary))
            }
            [primary, secondary] => Ok(Self::dual(primary, secondary)),
            _ => Err(InvalidTypingError::Count(value.len())),
        }
    }
}

impl TryFrom<Vec<Type>> for Typing {
    type Error = InvalidTypingError;
    fn try_from(value: Vec<Type>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl From<Typing> for Vec<Type> {
    fn from(value: Typing) -> Self {
        value.types().collect()
    }
}
