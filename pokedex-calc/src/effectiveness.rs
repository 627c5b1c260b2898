use std::ops::Mul;

use itertools::Itertools;
use pokedex_data::{
    Fraction,
    Type,
    TypeChart,
    Typing,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Calculates the combined multiplier of an attacking type against a defending type combination.
///
/// The result is the product of the single-type multipliers, so dual types can yield `1/4` or `4`.
pub fn multiplier(chart: &TypeChart, attacking: Type, defending: Typing) -> Fraction {
    defending
        .types()
        .map(|defense_type| Fraction::from(chart.effectiveness(attacking, defense_type)))
        .fold(Fraction::ONE, Mul::mul)
}

/// The multiplier of a single attacking type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    #[serde(rename = "type")]
    pub typ: Type,
    pub multiplier: Fraction,
}

/// Every attacking type, bucketed by how it fares against a defending type combination.
///
/// Within a bucket, matchups are ordered by ascending multiplier, then by canonical type order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchups {
    /// Multiplier greater than 1.
    pub weaknesses: Vec<Matchup>,
    /// Multiplier between 0 and 1.
    pub resistances: Vec<Matchup>,
    /// Multiplier of 0.
    pub immunities: Vec<Matchup>,
    /// Multiplier of exactly 1.
    pub neutral: Vec<Matchup>,
}

impl Matchups {
    /// Iterates over every matchup in every bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Matchup> {
        self.weaknesses
            .iter()
            .chain(self.resistances.iter())
            .chain(self.immunities.iter())
            .chain(self.neutral.iter())
    }

    /// Looks up the multiplier of a single attacking type.
    pub fn get(&self, typ: Type) -> Option<Fraction> {
        self.iter()
            .find(|matchup| matchup.typ == typ)
            .map(|matchup| matchup.multiplier)
    }

    fn push(&mut self, matchup: Matchup) {
        let bucket = if matchup.multiplier.is_zero() {
            &mut self.immunities
        } else if matchup.multiplier < Fraction::ONE {
            &mut self.resistances
        } else if matchup.multiplier == Fraction::ONE {
            &mut self.neutral
        } else {
            &mut self.weaknesses
        };
        bucket.push(matchup);
    }
}

/// Classifies every attacking type against a defending type combination.
pub fn classify(chart: &TypeChart, defending: Typing) -> Matchups {
    let mut matchups = Matchups::default();
    // Type::ALL is in canonical order, and the sort is stable.
    Type::ALL
        .into_iter()
        .map(|typ| Matchup {
            typ,
            multiplier: multiplier(chart, typ, defending),
        })
        .sorted_by_key(|matchup| matchup.multiplier)
        .for_each(|matchup| matchups.push(matchup));
    log::trace!(
        "classified {defending:?}: {} weaknesses, {} resistances, {} immunities",
        matchups.weaknesses.len(),
        matchups.resistances.len(),
        matchups.immunities.len()
    );
    matchups
}
