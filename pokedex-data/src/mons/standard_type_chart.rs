use crate::{
    Type,
    TypeEffectiveness,
};

/// Non-neutral single-type matchups of the standard chart, keyed by attacking type.
///
/// Every pairing not listed here is neutral.
pub(crate) static STANDARD_TYPE_CHART: &[(Type, &[(Type, TypeEffectiveness)])] = &[
    (
        Type::Normal,
        &[
            (Type::Rock, TypeEffectiveness::Weak),
            (Type::Ghost, TypeEffectiveness::None),
            (Type::Steel, TypeEffectiveness::Weak),
        ],
    ),
    (
        Type::Fighting,
        &[
            (Type::Normal, TypeEffectiveness::Strong),
            (Type::Flying, TypeEffectiveness::Weak),
            (Type::Poison, TypeEffectiveness::Weak),
            (Type::Rock, TypeEffectiveness::Strong),
            (Type::Bug, TypeEffectiveness::Weak),
            (Type::Ghost, TypeEffectiveness::None),
            (Type::Steel, TypeEffectiveness::Strong),
            (Type::Psychic, TypeEffectiveness::Weak),
            (Type::Ice, TypeEffectiveness::Strong),
            (Type::Dark, TypeEffectiveness::Strong),
            (Type::Fairy, TypeEffectiveness::Weak),
        ],
    ),
    (
        Type::Flying,
        &[
            (Type::Fighting, TypeEffectiveness::Strong),
            (Type::Rock, TypeEffectiveness::Weak),
            (Type::Bug, TypeEffectiveness::Strong),
            (Type::Steel, TypeEffectiveness::Weak),
            (Type::Grass, TypeEffectiveness::Strong),
            (Type::Electric, TypeEffectiveness::Weak),
        ],
    ),
    (
        Type::Poison,
        &[
            (Type::Poison, TypeEffectiveness::Weak),
            (Type::Ground, TypeEffectiveness::Weak),
            (Type::Rock, TypeEffectiveness::Weak),
            (Type::Ghost, TypeEffectiveness::Weak),
            (Type::Steel, TypeEffectiveness::None),
            (Type::Grass, TypeEffectiveness::Strong),
            (Type::Fairy, TypeEffectiveness::Strong),
        ],
    ),
    (
        Type::Ground,
        &[
            (Type::Flying, TypeEffectiveness::None),
            (Type::Poison, TypeEffectiveness::Strong),
            (Type::Rock, TypeEffectiveness::Strong),
            (Type::Bug, TypeEffectiveness::Weak),
            (Type::Steel, TypeEffectiveness::Strong),
            (Type::Fire, TypeEffectiveness::Strong),
            (Type::Grass, TypeEffectiveness::Weak),
            (Type::Electric, TypeEffectiveness::Strong),
        ],
    ),
    (
        Type::Rock,
        &[
            (Type::Fighting, TypeEffectiveness::Weak),
            (Type::Flying, TypeEffectiveness::Strong),
            (Type::Ground, TypeEffectiveness::Weak),
            (Type::Bug, TypeEffectiveness::Strong),
            (Type::Steel, TypeEffectiveness::Weak),
            (Type::Fire, TypeEffectiveness::Strong),
            (Type::Ice, TypeEffectiveness::Strong),
        ],
    ),
    (
        Type::Bug,
        &[
            (Type::Fighting, TypeEffectiveness::Weak),
            (Type::Flying, TypeEffectiveness::Weak),
            (Type::Poison, TypeEffectiveness::Weak),
            (Type::Ghost, TypeEffectiveness::Weak),
            (Type::Steel, TypeEffectiveness::Weak),
            (Type::Fire, TypeEffectiveness::Weak),
            (Type::Grass, TypeEffectiveness::Strong),
            (Type::Psychic, TypeEffectiveness::Strong),
            (Type::Dark, TypeEffectiveness::Strong),
            (Type::Fairy, TypeEffectiveness::Weak),
        ],
    ),
    (
        Type::Ghost,
        &[
            (Type::Normal, TypeEffectiveness::None),
            (Type::Ghost, TypeEffectiveness::Strong),
            (Type::Psychic, TypeEffectiveness::Strong),
            (Type::Dark, TypeEffectiveness::Weak),
        ],
    ),
    (
        Type::Steel,
        &[
            (Type::Rock, TypeEffectiveness::Strong),
            (Type::Steel, TypeEffectiveness::Weak),
            (Type::Fire, TypeEffectiveness::Weak),
            (Type::Water, TypeEffectiveness::Weak),
            (Type::Electric, TypeEffectiveness::Weak),
            (Type::Ice, TypeEffectiveness::Strong),
            (Type::Fairy, TypeEffectiveness::Strong),
        ],
    ),
    (
        Type::Fire,
        &[
            (Type::Rock, TypeEffectiveness::Weak),
            (Type::Bug, TypeEffectiveness::Strong),
            (Type::Steel, TypeEffectiveness::Strong),
            (Type::Fire, TypeEffectiveness::Weak),
            (Type::Water, TypeEffectiveness::Weak),
            (Type::Grass, TypeEffectiveness::Strong),
            (Type::Ice, TypeEffectiveness::Strong),
            (Type::Dragon, TypeEffectiveness::Weak),
        ],
    ),
    (
        Type::Water,
        &[
            (Type::Ground, TypeEffectiveness::Strong),
            (Type::Rock, TypeEffectiveness::Strong),
            (Type::Fire, TypeEffectiveness::Strong),
            (Type::Water, TypeEffectiveness::Weak),
            (Type::Grass, TypeEffectiveness::Weak),
            (Type::Dragon, TypeEffectiveness::Weak),
        ],
    ),
    (
        Type::Grass,
        &[
            (Type::Flying, TypeEffectiveness::Weak),
            (Type::Poison, TypeEffectiveness::Weak),
            (Type::Ground, TypeEffectiveness::Strong),
            (Type::Rock, TypeEffectiveness::Strong),
            (Type::Bug, TypeEffectiveness::Weak),
            (Type::Steel, TypeEffectiveness::Weak),
            (Type::Fire, TypeEffectiveness::Weak),
            (Type::Water, TypeEffectiveness::Strong),
            (Type::Grass, TypeEffectiveness::Weak),
            (Type::Dragon, TypeEffectiveness::Weak),
        ],
    ),
    (
        Type::Electric,
        &[
            (Type::Flying, TypeEffectiveness::Strong),
            (Type::Ground, TypeEffectiveness::None),
            (Type::Water, TypeEffectiveness::Strong),
            (Type::Grass, TypeEffectiveness::Weak),
            (Type::Electric, TypeEffectiveness::Weak),
            (Type::Dragon, TypeEffectiveness::Weak),
        ],
    ),
    (
        Type::Psychic,
        &[
            (Type::Fighting, TypeEffectiveness::Strong),
            (Type::Poison, TypeEffectiveness::Strong),
            (Type::Steel, TypeEffectiveness::Weak),
            (Type::Psychic, TypeEffectiveness::Weak),
            (Type::Dark, TypeEffectiveness::None),
        ],
    ),
    (
        Type::Ice,
        &[
            (Type::Flying, TypeEffectiveness::Strong),
            (Type::Ground, TypeEffectiveness::Strong),
            (Type::Steel, TypeEffectiveness::Weak),
            (Type::Fire, TypeEffectiveness::Weak),
            (Type::Water, TypeEffectiveness::Weak),
            (Type::Grass, TypeEffectiveness::Strong),
            (Type::Ice, TypeEffectiveness::Weak),
            (Type::Dragon, TypeEffectiveness::Strong),
        ],
    ),
    (
        Type::Dragon,
        &[
            (Type::Steel, TypeEffectiveness::Weak),
            (Type::Dragon, TypeEffectiveness::Strong),
            (Type::Fairy, TypeEffectiveness::None),
        ],
    ),
    (
        Type::Dark,
        &[
            (Type::Fighting, TypeEffectiveness::Weak),
            (Type::Ghost, TypeEffectiveness::Strong),
            (Type::Psychic, TypeEffectiveness::Strong),
            (Type::Dark, TypeEffectiveness::Weak),
            (Type::Fairy, TypeEffectiveness::Weak),
        ],
    ),
    (
        Type::Fairy,
        &[
            (Type::Fighting, TypeEffectiveness::Strong),
            (Type::Poison, TypeEffectiveness::Weak),
            (Type::Steel, TypeEffectiveness::Weak),
            (Type::Fire, TypeEffectiveness::Weak),
            (Type::Dragon, TypeEffectiveness::Strong),
            (Type::Dark, TypeEffectiveness::Strong),
        ],
    ),
];
