use pokedex_data::{
    Fraction,
    MoveData,
    PokemonRecord,
    Stat,
    TypeChart,
};
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::{
    common::Output,
    effectiveness::multiplier,
};

/// A failure to estimate damage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DamageError {
    /// The move is a status move or has no base power, so it deals no direct damage.
    #[error("move {name} does not deal direct damage")]
    InapplicableMove { name: String },
    /// The defender's HP is `0`, so damage cannot be expressed as a share of it.
    #[error("defender {name} has undefined vitality")]
    UndefinedDefenderVitality { name: String },
    /// The defender's defensive stat is `0`, so the damage formula would divide by zero.
    #[error("defender {name} has undefined {stat}")]
    UndefinedDefenderStat { name: String, stat: Stat },
}

/// A deterministic damage range for one hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageEstimate {
    /// The lowest damage roll.
    pub min_damage: u32,
    /// The highest damage roll.
    pub max_damage: u32,
    /// [`Self::min_damage`] as a rounded percentage of the defender's HP.
    ///
    /// May exceed 100.
    pub percentage: u32,
    /// Combined type effectiveness of the move against the defender.
    pub type_effectiveness: Fraction,
    /// Every operation applied to reach [`Self::max_damage`].
    pub description: Vec<String>,
}

/// Level assumed for both the attacker and the defender.
pub const REFERENCE_LEVEL: u32 = 50;

/// Bonus for a move that shares a type with its user.
pub const STAB: Fraction = Fraction::new(3, 2);

/// The lowest damage roll, as a share of the highest.
pub const RANDOM_FACTOR_FLOOR: Fraction = Fraction::new(85, 100);

/// Estimates the damage a single hit of a move deals.
///
/// Both sides are assumed to be at [`REFERENCE_LEVEL`] with no stat modifications. The damage range
/// spans the random factor, from [`RANDOM_FACTOR_FLOOR`] of the highest roll up to the highest
/// roll.
pub fn estimate_damage(
    chart: &TypeChart,
    attacker: &PokemonRecord,
    defender: &PokemonRecord,
    mov: &MoveData,
) -> Result<DamageEstimate, DamageError> {
    let inapplicable = || DamageError::InapplicableMove {
        name: mov.name.clone(),
    };
    if !mov.deals_direct_damage() {
        return Err(inapplicable());
    }
    let (Some(attack_stat), Some(defense_stat)) = (
        mov.category.offensive_stat(),
        mov.category.defensive_stat(),
    ) else {
        return Err(inapplicable());
    };

    let hp = defender.stat(Stat::HP) as u32;
    if hp == 0 {
        return Err(DamageError::UndefinedDefenderVitality {
            name: defender.name.clone(),
        });
    }
    let attack = attacker.stat(attack_stat) as u32;
    let defense = defender.stat(defense_stat) as u32;
    if defense == 0 {
        return Err(DamageError::UndefinedDefenderStat {
            name: defender.name.clone(),
            stat: defense_stat,
        });
    }

    let level_component = 2 * REFERENCE_LEVEL / 5 + 2;
    let mut base_damage = Output::<Fraction>::start(attack, "attack");
    base_damage.mul(level_component, "attacker level");
    base_damage.mul(mov.base_power, "base power");
    base_damage.div(defense, "defense");
    base_damage.div(50u32, "constant");
    base_damage.add(2u32, "constant");

    let mut damage = base_damage.map(|val| Fraction::from(val.floor()), "floor");

    if attacker.has_type(mov.primary_type) {
        damage.mul(STAB, "stab");
    }

    let type_effectiveness = multiplier(chart, mov.primary_type, defender.types);
    damage.mul(type_effectiveness, "type effectiveness");

    let (max_damage, description) = damage.map(|val| val.floor(), "floor").into_parts();
    let min_damage = RANDOM_FACTOR_FLOOR.mul_floor(max_damage);
    let percentage = rounded_percentage(min_damage, hp);

    log::debug!(
        "{} using {} against {}: [{min_damage},{max_damage}] ({percentage}%)",
        attacker.name,
        mov.name,
        defender.name
    );

    Ok(DamageEstimate {
        min_damage,
        max_damage,
        percentage,
        type_effectiveness,
        description,
    })
}

// Rounds half up.
fn rounded_percentage(damage: u32, hp: u32) -> u32 {
    let damage = damage as u64;
    let hp = hp as u64;
    ((damage * 200 + hp) / (hp * 2)) as u32
}
