use anyhow::Result;

use crate::{
    MoveData,
    PokemonRecord,
    TypeChart,
};

/// Source of catalog data.
///
/// This trait can be implemented for different data sources, such as a remote API or disk. Whatever
/// the source, records are validated before they are returned, so consumers only ever see typed
/// data.
pub trait DataStore: Send + Sync {
    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;

    /// Loads every species, ordered by National Dex number.
    ///
    /// Fails if any single species fails to load.
    fn load_catalog(&self) -> Result<Vec<PokemonRecord>>;
    /// Loads every move, ordered by name.
    fn load_moves(&self) -> Result<Vec<MoveData>>;

    /// Gets a species by National Dex number.
    fn get_species(&self, id: u32) -> Result<Option<PokemonRecord>>;
    /// Gets a move by name.
    fn get_move(&self, name: &str) -> Result<Option<MoveData>>;
}
