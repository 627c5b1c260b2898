mod pokemon_record;
mod standard_type_chart;
mod stat;
mod r#type;
mod typing;

pub use pokemon_record::PokemonRecord;
pub use stat::{
    Stat,
    StatTable,
    StatTableEntries,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
pub use typing::{
    InvalidTypingError,
    Typing,
};
