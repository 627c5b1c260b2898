use pokedex_data::{
    Fraction,
    PokemonRecord,
    Stat,
};

use crate::{
    FilterCriteria,
    TypeMatch,
};

/// Criteria prepared for matching against many records.
struct Matcher<'c> {
    criteria: &'c FilterCriteria,
    search: String,
    ability: String,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            search: criteria.search.to_lowercase(),
            ability: criteria.ability.to_lowercase(),
        }
    }

    fn matches(&self, record: &PokemonRecord) -> bool {
        self.matches_search(record)
            && self.matches_types(record)
            && self.matches_stats(record)
            && self.matches_measurements(record)
            && self.matches_ability(record)
    }

    fn matches_search(&self, record: &PokemonRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        record.name.to_lowercase().contains(&self.search)
            || record.id.to_string().contains(&self.search)
    }

    fn matches_types(&self, record: &PokemonRecord) -> bool {
        if self.criteria.types.is_empty() {
            return true;
        }
        let mut required = self.criteria.types.iter();
        match self.criteria.type_match {
            TypeMatch::Any => required.any(|typ| record.has_type(*typ)),
            TypeMatch::All => required.all(|typ| record.has_type(*typ)),
        }
    }

    fn matches_stats(&self, record: &PokemonRecord) -> bool {
        // A zero stat means the stats have not been loaded, so the record cannot be judged.
        if record.stats.is_incomplete() {
            return true;
        }
        Stat::ALL
            .into_iter()
            .all(|stat| self.criteria.stats.get(stat).contains(record.stat(stat)))
    }

    fn matches_measurements(&self, record: &PokemonRecord) -> bool {
        self.criteria
            .height
            .map(u64::from)
            .contains(record.height_centimeters())
            && self
                .criteria
                .weight
                .map(Fraction::from)
                .contains(record.weight_kilograms())
    }

    fn matches_ability(&self, record: &PokemonRecord) -> bool {
        if self.ability.is_empty() {
            return true;
        }
        record
            .all_abilities()
            .any(|ability| ability.to_lowercase().contains(&self.ability))
    }
}

/// Filters records down to those matching every predicate of the criteria.
///
/// Input order is preserved.
pub fn filter<'r, I>(records: I, criteria: &FilterCriteria) -> Vec<&'r PokemonRecord>
where
    I: IntoIterator<Item = &'r PokemonRecord>,
{
    let matcher = Matcher::new(criteria);
    records
        .into_iter()
        .filter(|record| matcher.matches(record))
        .collect()
}
