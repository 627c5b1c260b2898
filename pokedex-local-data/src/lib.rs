mod api;
mod local_data_store;

pub use api::{
    AbilitySlot,
    Artwork,
    BaseStat,
    MoveDocument,
    NamedResource,
    OtherSprites,
    SpeciesDocument,
    Sprites,
    TypeSlot,
    display_name,
};
pub use local_data_store::LocalDataStore;
