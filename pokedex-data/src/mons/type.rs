use std::fmt;

use ahash::{
    HashMap,
    HashMapExt,
};
use serde::{
    Deserialize,
    Serialize,
    de::{
        Unexpected,
        Visitor,
    },
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    Fraction,
    mons::standard_type_chart::STANDARD_TYPE_CHART,
};

/// The type of a species or move, which determines weaknesses and resistances.
///
/// Declaration order is the canonical type order, used wherever output must be deterministic.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "normal"]
    Normal,
    #[string = "fighting"]
    Fighting,
    #[string = "flying"]
    Flying,
    #[string = "poison"]
    Poison,
    #[string = "ground"]
    Ground,
    #[string = "rock"]
    Rock,
    #[string = "bug"]
    Bug,
    #[string = "ghost"]
    Ghost,
    #[string = "steel"]
    Steel,
    #[string = "fire"]
    Fire,
    #[string = "water"]
    Water,
    #[string = "grass"]
    Grass,
    #[string = "electric"]
    Electric,
    #[string = "psychic"]
    Psychic,
    #[string = "ice"]
    Ice,
    #[string = "dragon"]
    Dragon,
    #[string = "dark"]
    Dark,
    #[string = "fairy"]
    Fairy,
}

impl Type {
    /// All types, in canonical order.
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// Looks up the effectiveness for an exact multiplier.
    pub fn from_multiplier(value: f64) -> Option<Self> {
        if value == 0f64 {
            Some(Self::None)
        } else if value == 0.5 {
            Some(Self::Weak)
        } else if value == 1f64 {
            Some(Self::Normal)
        } else if value == 2f64 {
            Some(Self::Strong)
        } else {
            None
        }
    }
}

impl From<TypeEffectiveness> for f32 {
    fn from(value: TypeEffectiveness) -> Self {
        match value {
            TypeEffectiveness::None => 0f32,
            TypeEffectiveness::Weak => 0.5,
            TypeEffectiveness::Normal => 1f32,
            TypeEffectiveness::Strong => 2f32,
        }
    }
}

impl From<TypeEffectiveness> for Fraction {
    fn from(value: TypeEffectiveness) -> Self {
        match value {
            TypeEffectiveness::None => Fraction::ZERO,
            TypeEffectiveness::Weak => Fraction::new(1, 2),
            TypeEffectiveness::Normal => Fraction::ONE,
            TypeEffectiveness::Strong => Fraction::from(2),
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f32(f32::from(*self)),
            _ => serializer.serialize_u32(f32::from(*self) as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_multiplier(v as f64)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_multiplier(v as f64)
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_multiplier(v).ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f32(TypeEffectivenessVisitor)
    }
}

/// A type table, which contains type effectiveness information for types against some other value.
///
/// The key here is the attacking type.
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// A type chart, which contains all type effectiveness information for types against other types.
///
/// The key here is the attacking type. Pairings absent from the chart are neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    pub fn from_filled(types: TypeTable<Type>) -> Self {
        Self { types }
    }

    /// The standard 18-type chart.
    pub fn standard() -> Self {
        Self::from_filled(
            STANDARD_TYPE_CHART
                .iter()
                .map(|(attacking, row)| (*attacking, row.iter().copied().collect()))
                .collect(),
        )
    }

    /// Looks up the effectiveness of an attacking type against a single defending type.
    pub fn effectiveness(&self, attacking: Type, defending: Type) -> TypeEffectiveness {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod type_effectiveness_test {
    use ahash::HashMap;

    use crate::{
        Fraction,
        Type,
        TypeChart,
        TypeEffectiveness,
        TypeTable,
        test_util::{
            test_deserialization,
            test_serialization,
        },
    };

    #[test]
    fn serializes_to_number() {
        test_serialization(TypeEffectiveness::None, 0);
        test_serialization(TypeEffectiveness::Weak, 0.5);
        test_serialization(TypeEffectiveness::Normal, 1);
        test_serialization(TypeEffectiveness::Strong, 2);
    }

    #[test]
    fn deserializes_exact_multipliers_only() {
        test_deserialization("0", TypeEffectiveness::None);
        test_deserialization("0.5", TypeEffectiveness::Weak);
        test_deserialization("1", TypeEffectiveness::Normal);
        test_deserialization("2.0", TypeEffectiveness::Strong);
        for invalid in ["0.25", "-1", "1.5", "4", "\"2\""] {
            assert!(
                serde_json::from_str::<TypeEffectiveness>(invalid).is_err(),
                "{invalid}"
            );
        }
    }

    #[test]
    fn converts_to_fraction() {
        assert_eq!(Fraction::from(TypeEffectiveness::None), Fraction::ZERO);
        assert_eq!(Fraction::from(TypeEffectiveness::Weak), Fraction::new(1, 2));
        assert_eq!(Fraction::from(TypeEffectiveness::Normal), Fraction::ONE);
        assert_eq!(Fraction::from(TypeEffectiveness::Strong), Fraction::from(2));
    }

    #[test]
    fn deserializes_type_chart() {
        let str = r#"{
           "types": {
                "fire": {
                    "fire": 0.5,
                    "water": 0.5,
                    "grass": 2,
                    "ice": 2,
                    "bug": 2,
                    "rock": 0.5,
                    "dragon": 0.5,
                    "steel": 2
                }
            }
        }"#;
        let tc = serde_json::from_str::<TypeChart>(str).unwrap();
        let expected = TypeChart::from_filled(TypeTable::from_iter([(
            Type::Fire,
            HashMap::from_iter([
                (Type::Fire, TypeEffectiveness::Weak),
                (Type::Water, TypeEffectiveness::Weak),
                (Type::Grass, TypeEffectiveness::Strong),
                (Type::Ice, TypeEffectiveness::Strong),
                (Type::Bug, TypeEffectiveness::Strong),
                (Type::Rock, TypeEffectiveness::Weak),
                (Type::Dragon, TypeEffectiveness::Weak),
                (Type::Steel, TypeEffectiveness::Strong),
            ]),
        )]));
        pretty_assertions::assert_eq!(tc, expected)
    }

    #[test]
    fn missing_pairings_are_neutral() {
        let chart = TypeChart::new();
        assert_eq!(
            chart.effectiveness(Type::Fire, Type::Grass),
            TypeEffectiveness::Normal
        );
        test_deserialization("{\"types\":{}}", chart);
    }

    #[test]
    fn standard_chart_looks_up_single_type_matchups() {
        let chart = TypeChart::standard();
        assert_eq!(
            chart.effectiveness(Type::Fire, Type::Grass),
            TypeEffectiveness::Strong
        );
        assert_eq!(
            chart.effectiveness(Type::Grass, Type::Fire),
            TypeEffectiveness::Weak
        );
        assert_eq!(
            chart.effectiveness(Type::Normal, Type::Ghost),
            TypeEffectiveness::None
        );
        assert_eq!(
            chart.effectiveness(Type::Ghost, Type::Normal),
            TypeEffectiveness::None
        );
        assert_eq!(
            chart.effectiveness(Type::Dragon, Type::Fairy),
            TypeEffectiveness::None
        );
        assert_eq!(
            chart.effectiveness(Type::Water, Type::Electric),
            TypeEffectiveness::Normal
        );
    }

    #[test]
    fn standard_chart_is_asymmetric() {
        let chart = TypeChart::standard();
        assert_eq!(
            chart.effectiveness(Type::Electric, Type::Ground),
            TypeEffectiveness::None
        );
        assert_eq!(
            chart.effectiveness(Type::Ground, Type::Electric),
            TypeEffectiveness::Strong
        );
    }
}
