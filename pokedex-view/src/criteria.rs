use pokedex_data::{
    Range,
    Stat,
    Type,
};
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    de::Error,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// How the required types of a [`FilterCriteria`] are matched.
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
pub enum TypeMatch {
    /// At least one required type is present.
    #[default]
    #[string = "any"]
    Any,
    /// Every required type is present.
    #[string = "all"]
    All,
}

fn full_stat_range() -> Range<u16> {
    Range::new(0, u16::MAX)
}

/// One inclusive range per base stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRanges {
    #[serde(default = "full_stat_range")]
    pub hp: Range<u16>,
    #[serde(default = "full_stat_range", rename = "attack", alias = "atk")]
    pub atk: Range<u16>,
    #[serde(default = "full_stat_range", rename = "defense", alias = "def")]
    pub def: Range<u16>,
    #[serde(default = "full_stat_range", rename = "special-attack", alias = "spa")]
    pub spa: Range<u16>,
    #[serde(default = "full_stat_range", rename = "special-defense", alias = "spd")]
    pub spd: Range<u16>,
    #[serde(default = "full_stat_range", rename = "speed", alias = "spe")]
    pub spe: Range<u16>,
}

impl StatRanges {
    /// Returns the range for the given stat.
    pub fn get(&self, stat: Stat) -> Range<u16> {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the range for the given stat.
    pub fn set(&mut self, stat: Stat, range: Range<u16>) {
        let slot = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *slot = range;
    }

    /// Builder-style variant of [`Self::set`].
    pub fn with(mut self, stat: Stat, range: Range<u16>) -> Self {
        self.set(stat, range);
        self
    }
}

impl Default for StatRanges {
    fn default() -> Self {
        Self {
            hp: full_stat_range(),
            atk: full_stat_range(),
            def: full_stat_range(),
            spa: full_stat_range(),
            spd: full_stat_range(),
            spe: full_stat_range(),
        }
    }
}

fn full_measure_range() -> Range<u32> {
    Range::new(0, u32::MAX)
}

/// Most types a species can have, and so the most types worth requiring.
pub const MAX_REQUIRED_TYPES: usize = 2;

fn deserialize_required_types<'de, D>(deserializer: D) -> Result<Vec<Type>, D::Error>
where
    D: Deserializer<'de>,
{
    let types = Vec::<Type>::deserialize(deserializer)?;
    if types.len() > MAX_REQUIRED_TYPES {
        return Err(D::Error::invalid_length(
            types.len(),
            &"at most 2 required types",
        ));
    }
    Ok(types)
}

/// Criteria for narrowing down the catalog.
///
/// Every predicate defaults to matching everything. Ranges can never be inverted, so any set of
/// criteria is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the name, or substring of the National Dex number.
    #[serde(default)]
    pub search: String,
    /// Required types.
    ///
    /// Empty means no type requirement. Deserialization rejects more than
    /// [`MAX_REQUIRED_TYPES`]; a longer list built in code
    /// is matched as given.
    #[serde(default, deserialize_with = "deserialize_required_types")]
    pub types: Vec<Type>,
    /// How [`Self::types`] is matched.
    #[serde(default)]
    pub type_match: TypeMatch,
    /// Base stat ranges.
    ///
    /// Ignored for records whose stats are not fully loaded.
    #[serde(default)]
    pub stats: StatRanges,
    /// Height range in centimetres (cm).
    #[serde(default = "full_measure_range")]
    pub height: Range<u32>,
    /// Weight range in kilograms (kg).
    #[serde(default = "full_measure_range")]
    pub weight: Range<u32>,
    /// Case-insensitive substring of any regular or hidden ability.
    #[serde(default)]
    pub ability: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            types: Vec::new(),
            type_match: TypeMatch::default(),
            stats: StatRanges::default(),
            height: full_measure_range(),
            weight: full_measure_range(),
            ability: String::new(),
        }
    }
}

#[cfg(test)]
mod criteria_test {
    use pokedex_data::{
        Range,
        Stat,
        Type,
    };

    use crate::{
        FilterCriteria,
        StatRanges,
        TypeMatch,
    };

    #[test]
    fn deserializes_empty_object_to_match_everything() {
        pretty_assertions::assert_eq!(
            serde_json::from_str::<FilterCriteria>("{}").unwrap(),
            FilterCriteria::default()
        );
    }

    #[test]
    fn deserializes_partial_criteria() {
        let criteria = serde_json::from_str::<FilterCriteria>(
            r#"{
                "search": "saur",
                "types": ["grass", "Poison"],
                "type_match": "all",
                "stats": { "speed": { "min": 100, "max": 255 } },
                "weight": { "min": 5, "max": 100 }
            }"#,
        )
        .unwrap();
        assert_eq!(criteria.search, "saur");
        assert_eq!(criteria.types, [Type::Grass, Type::Poison]);
        assert_eq!(criteria.type_match, TypeMatch::All);
        assert_eq!(criteria.stats.get(Stat::Spe), Range::new(100, 255));
        assert_eq!(criteria.stats.get(Stat::HP), Range::new(0, u16::MAX));
        assert_eq!(criteria.weight, Range::new(5, 100));
        assert_eq!(criteria.height, Range::new(0, u32::MAX));
    }

    #[test]
    fn rejects_inverted_ranges() {
        assert!(
            serde_json::from_str::<FilterCriteria>(r#"{"height":{"min":10,"max":1}}"#).is_err()
        );
        assert!(
            serde_json::from_str::<FilterCriteria>(
                r#"{"stats":{"attack":{"min":200,"max":100}}}"#
            )
            .is_err()
        );
    }

    #[test]
    fn rejects_unknown_types() {
        assert!(serde_json::from_str::<FilterCriteria>(r#"{"types":["shadow"]}"#).is_err());
    }

    #[test]
    fn rejects_more_than_two_required_types() {
        assert!(
            serde_json::from_str::<FilterCriteria>(r#"{"types":["fire","water","grass"]}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<FilterCriteria>(r#"{"types":[]}"#)
                .unwrap()
                .types
                .is_empty()
        );
    }

    #[test]
    fn sets_individual_stat_ranges() {
        let ranges = StatRanges::default().with(Stat::SpAtk, Range::new(50, 60));
        assert_eq!(ranges.spa, Range::new(50, 60));
        assert_eq!(ranges.get(Stat::SpDef), Range::new(0, u16::MAX));
    }
}
