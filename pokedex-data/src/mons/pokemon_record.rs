use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Fraction,
    Stat,
    StatTable,
    Type,
    Typing,
};

/// The static, battle-relevant profile of one species.
///
/// Records are constructed once when the catalog is loaded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    /// National Dex number, which is unique and stable.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Types, in slot order.
    pub types: Typing,
    /// Height in decimetres (dm).
    pub height: u32,
    /// Weight in hectograms (hg).
    pub weight: u32,
    /// Regular abilities.
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Hidden abilities.
    #[serde(default)]
    pub hidden_abilities: Vec<String>,
    /// Base stats.
    ///
    /// Stats that have not been loaded yet are `0`.
    #[serde(default)]
    pub stats: StatTable,
    /// Artwork URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PokemonRecord {
    /// Height in centimetres (cm).
    pub fn height_centimeters(&self) -> u64 {
        self.height as u64 * 10
    }

    /// Weight in kilograms (kg).
    pub fn weight_kilograms(&self) -> Fraction {
        Fraction::new(self.weight, 10)
    }

    /// The base value of the given stat.
    pub fn stat(&self, stat: Stat) -> u16 {
        self.stats.get(stat)
    }

    /// Checks if the species has the given type.
    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(typ)
    }

    /// Iterates over all abilities, regular abilities first.
    pub fn all_abilities(&self) -> impl Iterator<Item = &str> {
        self.abilities
            .iter()
            .chain(self.hidden_abilities.iter())
            .map(|ability| ability.as_str())
    }
}

#[cfg(test)]
mod pokemon_record_test {
    use crate::{
        Fraction,
        PokemonRecord,
        StatTable,
        Type,
        Typing,
    };

    fn bulbasaur() -> PokemonRecord {
        PokemonRecord {
            id: 1,
            name: "Bulbasaur".to_owned(),
            types: Typing::dual(Type::Grass, Type::Poison),
            height: 7,
            weight: 69,
            abilities: vec!["overgrow".to_owned()],
            hidden_abilities: vec!["chlorophyll".to_owned()],
            stats: StatTable {
                hp: 45,
                atk: 49,
                def: 49,
                spa: 65,
                spd: 65,
                spe: 45,
            },
            image: None,
        }
    }

    #[test]
    fn deserializes_from_json() {
        let str = r#"{
            "id": 1,
            "name": "Bulbasaur",
            "types": ["grass", "poison"],
            "height": 7,
            "weight": 69,
            "abilities": ["overgrow"],
            "hidden_abilities": ["chlorophyll"],
            "stats": {
                "hp": 45,
                "attack": 49,
                "defense": 49,
                "special-attack": 65,
                "special-defense": 65,
                "speed": 45
            }
        }"#;
        pretty_assertions::assert_eq!(
            serde_json::from_str::<PokemonRecord>(str).unwrap(),
            bulbasaur()
        );
    }

    #[test]
    fn defaults_missing_stats_and_abilities() {
        let str = r#"{"id":4,"name":"Charmander","types":["fire"],"height":6,"weight":85}"#;
        let record = serde_json::from_str::<PokemonRecord>(str).unwrap();
        assert!(record.abilities.is_empty());
        assert!(record.stats.is_incomplete());
    }

    #[test]
    fn converts_display_units() {
        let record = bulbasaur();
        assert_eq!(record.height_centimeters(), 70);
        assert_eq!(record.weight_kilograms(), Fraction::new(69, 10));
    }

    #[test]
    fn iterates_over_all_abilities() {
        assert_eq!(
            bulbasaur().all_abilities().collect::<Vec<_>>(),
            ["overgrow", "chlorophyll"]
        );
    }
}
