use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// The category of a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    #[string = "physical"]
    Physical,
    #[string = "special"]
    Special,
    #[string = "status"]
    Status,
}

impl MoveCategory {
    /// The attacker's stat used by moves of this category, if the category deals direct damage.
    pub fn offensive_stat(&self) -> Option<Stat> {
        match self {
            Self::Physical => Some(Stat::Atk),
            Self::Special => Some(Stat::SpAtk),
            Self::Status => None,
        }
    }

    /// The defender's stat used against moves of this category, if the category deals direct
    /// damage.
    pub fn defensive_stat(&self) -> Option<Stat> {
        match self {
            Self::Physical => Some(Stat::Def),
            Self::Special => Some(Stat::SpDef),
            Self::Status => None,
        }
    }
}
