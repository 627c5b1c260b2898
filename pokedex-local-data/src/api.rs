use std::str::FromStr;

use anyhow::{
    Context,
    Error,
    Result,
};
use pokedex_data::{
    MoveCategory,
    MoveData,
    PokemonRecord,
    Stat,
    StatTable,
    Type,
    Typing,
};
use serde::Deserialize;

/// A reference to another resource by name.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub typ: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseStat {
    pub base_stat: u16,
    pub stat: NamedResource,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Artwork,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

/// A species document, as served by the PokeAPI `pokemon` endpoint.
///
/// Fields not needed for a [`PokemonRecord`] are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesDocument {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<BaseStat>,
    #[serde(default)]
    pub sprites: Sprites,
}

/// A move document, as served by the PokeAPI `move` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveDocument {
    pub name: String,
    /// Absent for moves that deal no direct damage.
    pub power: Option<u32>,
    #[serde(rename = "type")]
    pub typ: NamedResource,
    pub damage_class: NamedResource,
}

/// Capitalizes each `-`-separated segment of an API name.
pub fn display_name(api_name: &str) -> String {
    api_name
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn parse_type(name: &str) -> Result<Type> {
    Type::from_str(name).map_err(|_| Error::msg(format!("invalid type: \"{name}\"")))
}

impl TryFrom<SpeciesDocument> for PokemonRecord {
    type Error = Error;
    fn try_from(document: SpeciesDocument) -> Result<Self, Self::Error> {
        let mut slots = document.types;
        slots.sort_by_key(|slot| slot.slot);
        let types = slots
            .iter()
            .map(|slot| parse_type(&slot.typ.name))
            .collect::<Result<Vec<_>>>()?;
        let types = Typing::try_from(types)
            .with_context(|| format!("invalid types for {}", document.name))?;

        let (hidden_abilities, abilities): (Vec<_>, Vec<_>) = document
            .abilities
            .into_iter()
            .partition(|slot| slot.is_hidden);

        // Stats that are not base stats, like accuracy, are ignored.
        let stats = document
            .stats
            .iter()
            .filter_map(|base_stat| {
                Stat::from_str(&base_stat.stat.name)
                    .ok()
                    .map(|stat| (stat, base_stat.base_stat))
            })
            .collect::<StatTable>();

        Ok(Self {
            id: document.id,
            name: display_name(&document.name),
            types,
            height: document.height,
            weight: document.weight,
            abilities: abilities.into_iter().map(|slot| slot.ability.name).collect(),
            hidden_abilities: hidden_abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
            stats,
            image: document.sprites.other.official_artwork.front_default,
        })
    }
}

impl TryFrom<MoveDocument> for MoveData {
    type Error = Error;
    fn try_from(document: MoveDocument) -> Result<Self, Self::Error> {
        let category = MoveCategory::from_str(&document.damage_class.name).map_err(|_| {
            Error::msg(format!(
                "invalid damage class for {}: \"{}\"",
                document.name, document.damage_class.name
            ))
        })?;
        let primary_type = parse_type(&document.typ.name)
            .with_context(|| format!("invalid type for {}", document.name))?;
        Ok(Self {
            name: display_name(&document.name),
            category,
            primary_type,
            base_power: document.power.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod api_test {
    use pokedex_data::{
        MoveCategory,
        MoveData,
        PokemonRecord,
        StatTable,
        Type,
        Typing,
    };

    use crate::{
        MoveDocument,
        SpeciesDocument,
        display_name,
    };

    fn species(json: &str) -> anyhow::Result<PokemonRecord> {
        PokemonRecord::try_from(serde_json::from_str::<SpeciesDocument>(json).unwrap())
    }

    #[test]
    fn capitalizes_each_segment() {
        assert_eq!(display_name("bulbasaur"), "Bulbasaur");
        assert_eq!(display_name("mr-mime"), "Mr-Mime");
        assert_eq!(display_name("nidoran-f"), "Nidoran-F");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn converts_species_document() {
        let record = species(
            r#"{
                "id": 6,
                "name": "charizard",
                "height": 17,
                "weight": 905,
                "base_experience": 267,
                "types": [
                    { "slot": 2, "type": { "name": "flying", "url": "" } },
                    { "slot": 1, "type": { "name": "fire", "url": "" } }
                ],
                "abilities": [
                    { "ability": { "name": "solar-power" }, "is_hidden": true, "slot": 3 },
                    { "ability": { "name": "blaze" }, "is_hidden": false, "slot": 1 }
                ],
                "stats": [
                    { "base_stat": 78, "effort": 0, "stat": { "name": "hp" } },
                    { "base_stat": 84, "effort": 0, "stat": { "name": "attack" } },
                    { "base_stat": 78, "effort": 0, "stat": { "name": "defense" } },
                    { "base_stat": 109, "effort": 3, "stat": { "name": "special-attack" } },
                    { "base_stat": 85, "effort": 0, "stat": { "name": "special-defense" } },
                    { "base_stat": 100, "effort": 0, "stat": { "name": "speed" } },
                    { "base_stat": 1, "effort": 0, "stat": { "name": "accuracy" } }
                ],
                "sprites": {
                    "front_default": "front.png",
                    "other": { "official-artwork": { "front_default": "artwork.png" } }
                }
            }"#,
        )
        .unwrap();
        pretty_assertions::assert_eq!(
            record,
            PokemonRecord {
                id: 6,
                name: "Charizard".to_owned(),
                types: Typing::dual(Type::Fire, Type::Flying),
                height: 17,
                weight: 905,
                abilities: vec!["blaze".to_owned()],
                hidden_abilities: vec!["solar-power".to_owned()],
                stats: StatTable {
                    hp: 78,
                    atk: 84,
                    def: 78,
                    spa: 109,
                    spd: 85,
                    spe: 100,
                },
                image: Some("artwork.png".to_owned()),
            }
        );
    }

    #[test]
    fn missing_stats_and_sprites_are_allowed() {
        let record = species(
            r#"{"id":4,"name":"charmander","height":6,"weight":85,"types":[{"slot":1,"type":{"name":"fire"}}]}"#,
        )
        .unwrap();
        assert!(record.stats.is_incomplete());
        assert_eq!(record.image, None);
    }

    #[test]
    fn rejects_invalid_types() {
        let err = species(
            r#"{"id":1,"name":"missingno","height":1,"weight":1,"types":[{"slot":1,"type":{"name":"bird"}}]}"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid type: \"bird\""));

        assert!(species(r#"{"id":1,"name":"missingno","height":1,"weight":1,"types":[]}"#).is_err());
        assert!(
            species(
                r#"{"id":1,"name":"missingno","height":1,"weight":1,"types":[{"slot":1,"type":{"name":"fire"}},{"slot":2,"type":{"name":"fire"}}]}"#,
            )
            .is_err()
        );
    }

    #[test]
    fn converts_move_document() {
        let document = serde_json::from_str::<MoveDocument>(
            r#"{
                "name": "thunderbolt",
                "power": 90,
                "accuracy": 100,
                "type": { "name": "electric" },
                "damage_class": { "name": "special" }
            }"#,
        )
        .unwrap();
        pretty_assertions::assert_eq!(
            MoveData::try_from(document).unwrap(),
            MoveData {
                name: "Thunderbolt".to_owned(),
                category: MoveCategory::Special,
                primary_type: Type::Electric,
                base_power: 90,
            }
        );
    }

    #[test]
    fn null_power_becomes_zero() {
        let document = serde_json::from_str::<MoveDocument>(
            r#"{"name":"growl","power":null,"type":{"name":"normal"},"damage_class":{"name":"status"}}"#,
        )
        .unwrap();
        let move_data = MoveData::try_from(document).unwrap();
        assert_eq!(move_data.base_power, 0);
        assert!(!move_data.deals_direct_damage());
    }
}
