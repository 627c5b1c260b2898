use anyhow::{
    Context,
    Result,
};
use pokedex_data::{
    PokemonRecord,
    Stat,
    Typing,
};

fn parse_catalog(name: &str, json: &str) -> Result<Vec<PokemonRecord>> {
    serde_json::from_str(json).with_context(|| format!("failed to parse {name} catalog"))
}

/// Every species from the Kanto region, ordered by National Dex number, with base stats loaded.
pub fn kanto_catalog() -> Vec<PokemonRecord> {
    parse_catalog("kanto", include_str!("../fixtures/kanto.json")).unwrap()
}

/// The nine starter-line species shown when the catalog cannot be loaded.
///
/// Base stats are not loaded, so every record's stat table is incomplete.
pub fn fallback_catalog() -> Vec<PokemonRecord> {
    parse_catalog("fallback", include_str!("../fixtures/fallback.json")).unwrap()
}

/// Builds a record with the given base stats, in [`Stat::ALL`] order.
///
/// Height and weight start at `0`; tests set them as needed.
pub fn record(id: u32, name: &str, types: Typing, stats: [u16; 6]) -> PokemonRecord {
    PokemonRecord {
        id,
        name: name.to_owned(),
        types,
        height: 0,
        weight: 0,
        abilities: Vec::new(),
        hidden_abilities: Vec::new(),
        stats: Stat::ALL.into_iter().zip(stats).collect(),
        image: None,
    }
}

#[cfg(test)]
mod catalog_test {
    use pokedex_data::{
        Stat,
        Type,
        Typing,
    };

    use crate::{
        fallback_catalog,
        kanto_catalog,
        record,
    };

    #[test]
    fn kanto_catalog_is_complete_and_ordered() {
        let catalog = kanto_catalog();
        assert_eq!(catalog.len(), 151);
        assert!(catalog.iter().map(|record| record.id).eq(1..=151));
        assert!(catalog.iter().all(|record| !record.stats.is_incomplete()));
        assert_eq!(catalog[24].name, "Pikachu");
        assert_eq!(catalog[24].types, Typing::single(Type::Electric));
        assert_eq!(catalog[149].stat(Stat::SpAtk), 154);
    }

    #[test]
    fn fallback_catalog_has_no_stats() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.len(), 9);
        assert!(catalog.iter().all(|record| record.stats.is_incomplete()));
        assert_eq!(catalog[5].types, Typing::dual(Type::Fire, Type::Flying));
        assert_eq!(catalog[6].hidden_abilities, ["rain-dish"]);
    }

    #[test]
    fn builds_record_from_stat_array() {
        let record = record(7, "Test", Typing::single(Type::Water), [1, 2, 3, 4, 5, 6]);
        assert_eq!(record.stat(Stat::HP), 1);
        assert_eq!(record.stat(Stat::SpAtk), 4);
        assert_eq!(record.stat(Stat::Spe), 6);
    }
}
