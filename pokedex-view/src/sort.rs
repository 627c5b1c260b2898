use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{
        self,
        Display,
    },
    str::FromStr,
};

use anyhow::Error;
use feruca::Collator;
use pokedex_data::{
    PokemonRecord,
    Stat,
};
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        Unexpected,
        Visitor,
    },
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The key records are sorted by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// National Dex number.
    #[default]
    Id,
    /// Display name.
    Name,
    /// Stored height.
    Height,
    /// Stored weight.
    Weight,
    /// A single base stat.
    Stat(Stat),
}

impl Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::Name => write!(f, "name"),
            Self::Height => write!(f, "height"),
            Self::Weight => write!(f, "weight"),
            Self::Stat(stat) => write!(f, "{stat}"),
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "height" => Ok(Self::Height),
            "weight" => Ok(Self::Weight),
            _ => Stat::from_str(s)
                .map(Self::Stat)
                .map_err(|_| Error::msg(format!("invalid sort key: \"{s}\""))),
        }
    }
}

impl Serialize for SortKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct SortKeyVisitor;

impl<'de> Visitor<'de> for SortKeyVisitor {
    type Value = SortKey;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "\"id\", \"name\", \"height\", \"weight\", or a stat name")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(SortKeyVisitor)
    }
}

/// The direction records are sorted in.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum SortDirection {
    #[default]
    #[string = "asc"]
    #[alias = "ascending"]
    Ascending,
    #[string = "desc"]
    #[alias = "descending"]
    Descending,
}

/// How records are ordered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    #[serde(default)]
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates a new sort specification.
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

fn compare(
    collator: &mut Collator,
    lhs: &PokemonRecord,
    rhs: &PokemonRecord,
    key: SortKey,
) -> Ordering {
    match key {
        SortKey::Id => lhs.id.cmp(&rhs.id),
        SortKey::Name => collator.collate(lhs.name.as_str(), rhs.name.as_str()),
        SortKey::Height => lhs.height.cmp(&rhs.height),
        SortKey::Weight => lhs.weight.cmp(&rhs.weight),
        SortKey::Stat(stat) => lhs.stat(stat).cmp(&rhs.stat(stat)),
    }
}

/// Sorts records in place.
///
/// The sort is stable: records with equal keys keep their relative order, in either direction.
/// Names are compared with the Unicode Collation Algorithm under the root locale.
pub fn sort<R>(records: &mut [R], spec: &SortSpec)
where
    R: Borrow<PokemonRecord>,
{
    let mut collator = Collator::default();
    records.sort_by(|lhs, rhs| {
        let ordering = compare(&mut collator, lhs.borrow(), rhs.borrow(), spec.key);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
