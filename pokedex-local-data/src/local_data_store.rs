use std::{
    env,
    ffi::OsStr,
    fs::File,
    path::PathBuf,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use anyhow::{
    Context,
    Error,
    Result,
};
use pokedex_data::{
    DataStore,
    MoveData,
    PokemonRecord,
    TypeChart,
};
use serde::de::DeserializeOwned;

use crate::{
    MoveDocument,
    SpeciesDocument,
};

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// Every species and move document is validated when the store is created, so a store that exists
/// only serves valid data.
pub struct LocalDataStore {
    root: PathBuf,
    pub type_chart: TypeChart,
    pub species: HashMap<u32, PokemonRecord>,
    pub moves: HashMap<String, MoveData>,
}

impl LocalDataStore {
    /// Environment variable holding the default root directory.
    pub const DATA_DIR_VAR: &str = "POKEDEX_DATA_DIR";
    /// Type chart file name.
    pub const TYPE_CHART_FILE: &str = "type-chart.json";
    /// Species directory name.
    pub const SPECIES_DIR: &str = "mons";
    /// Moves directory name.
    pub const MOVES_DIR: &str = "moves";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not point to a directory, or if any document in it is invalid.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "root directory for LocalDataStore ({}) does not exist",
                root.display()
            )));
        }
        let mut store = Self {
            root,
            type_chart: TypeChart::new(),
            species: HashMap::new(),
            moves: HashMap::new(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).with_context(|| format!("{env_var} not defined"))?)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at
    /// [`Self::DATA_DIR_VAR`].
    pub fn new_from_default_env() -> Result<Self> {
        Self::new_from_env(Self::DATA_DIR_VAR)
    }

    fn initialize(&mut self) -> Result<()> {
        let type_chart_path = self.root.join(Self::TYPE_CHART_FILE);
        self.type_chart = if type_chart_path.is_file() {
            serde_json::from_reader(
                File::open(&type_chart_path).context("failed to read type chart")?,
            )
            .context("failed to parse type chart")?
        } else {
            log::debug!(
                "{} not found, using the standard type chart",
                type_chart_path.display()
            );
            TypeChart::standard()
        };

        for document in self.read_all_files_in_directory::<SpeciesDocument>(Self::SPECIES_DIR)? {
            let name = document.name.clone();
            let record = PokemonRecord::try_from(document)
                .with_context(|| format!("invalid species document for {name}"))?;
            if let Some(existing) = self.species.insert(record.id, record) {
                return Err(Error::msg(format!(
                    "species number {} is defined more than once ({name} and {})",
                    existing.id, existing.name
                )));
            }
        }

        for document in self.read_all_files_in_directory::<MoveDocument>(Self::MOVES_DIR)? {
            let id = document.name.to_lowercase();
            let move_data = MoveData::try_from(document)
                .with_context(|| format!("invalid move document for {id}"))?;
            if self.moves.insert(id.clone(), move_data).is_some() {
                return Err(Error::msg(format!("move {id} is defined more than once")));
            }
        }

        log::debug!(
            "loaded {} species and {} moves from {}",
            self.species.len(),
            self.moves.len(),
            self.root.display()
        );
        Ok(())
    }

    fn read_all_files_in_directory<T: DeserializeOwned>(&self, dir: &str) -> Result<Vec<T>> {
        let path = self.root.join(dir);
        if !path.is_dir() {
            log::debug!("{} not found, no data loaded", path.display());
            return Ok(Vec::new());
        }
        path.read_dir()
            .with_context(|| format!("failed to read {dir} directory"))?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| path.is_file())
            .filter(|path| {
                let is_json = path.extension() == Some(OsStr::new("json"));
                if !is_json {
                    log::warn!("skipping {}: not a JSON document", path.display());
                }
                is_json
            })
            .map(|path| {
                let path_name = path.to_string_lossy().to_string();
                serde_json::from_reader::<File, T>(
                    File::open(&path).with_context(|| format!("{path_name} could not be opened"))?,
                )
                .with_context(|| format!("failed to read {dir} data from {path_name}"))
            })
            .collect()
    }
}

impl DataStore for LocalDataStore {
    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn load_catalog(&self) -> Result<Vec<PokemonRecord>> {
        let mut catalog = self.species.values().cloned().collect::<Vec<_>>();
        catalog.sort_by_key(|record| record.id);
        Ok(catalog)
    }

    fn load_moves(&self) -> Result<Vec<MoveData>> {
        let mut moves = self.moves.values().cloned().collect::<Vec<_>>();
        moves.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name));
        Ok(moves)
    }

    fn get_species(&self, id: u32) -> Result<Option<PokemonRecord>> {
        Ok(self.species.get(&id).cloned())
    }

    fn get_move(&self, name: &str) -> Result<Option<MoveData>> {
        Ok(self.moves.get(&name.to_lowercase()).cloned())
    }
}
