mod common;
pub mod damage;
pub mod effectiveness;

pub use damage::{
    DamageError,
    DamageEstimate,
    estimate_damage,
};
pub use effectiveness::{
    Matchup,
    Matchups,
    classify,
    multiplier,
};
