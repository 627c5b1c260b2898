use ahash::HashSet;
use pokedex_data::{
    PokemonRecord,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    FilterCriteria,
    SortSpec,
    filter,
    sort,
};

/// Everything the caller controls about the displayed catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub sort: SortSpec,
}

/// The ordered records to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View<'r> {
    /// Records matching the criteria, in display order.
    pub records: Vec<&'r PokemonRecord>,
    /// Size of the collection before filtering.
    pub total: usize,
}

impl<'r> View<'r> {
    /// Number of records shown.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if no records matched.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// National Dex numbers of the shown records, in display order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.iter().map(|record| record.id)
    }
}

/// Filters and sorts a collection for display.
///
/// Recomputes from scratch on every call.
pub fn filter_and_sort<'r>(records: &'r [PokemonRecord], query: &ViewQuery) -> View<'r> {
    let mut shown = filter(records, &query.criteria);
    sort(&mut shown, &query.sort);
    log::debug!(
        "showing {} of {} records sorted by {} ({})",
        shown.len(),
        records.len(),
        query.sort.key,
        query.sort.direction
    );
    View {
        records: shown,
        total: records.len(),
    }
}

/// The distinct types present in a collection, in canonical order.
pub fn present_types<'r, I>(records: I) -> Vec<Type>
where
    I: IntoIterator<Item = &'r PokemonRecord>,
{
    let present = records
        .into_iter()
        .flat_map(|record| record.types.types())
        .collect::<HashSet<_>>();
    Type::ALL
        .into_iter()
        .filter(|typ| present.contains(typ))
        .collect()
}
