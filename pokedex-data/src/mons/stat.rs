use core::fmt::Debug;

use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single base stat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "attack"]
    #[alias = "atk"]
    Atk,
    #[string = "defense"]
    #[alias = "def"]
    Def,
    #[string = "special-attack"]
    #[alias = "spa"]
    #[alias = "spatk"]
    #[alias = "Sp.Atk"]
    #[alias = "Special Attack"]
    SpAtk,
    #[string = "special-defense"]
    #[alias = "spd"]
    #[alias = "spdef"]
    #[alias = "Sp.Def"]
    #[alias = "Special Defense"]
    SpDef,
    #[string = "speed"]
    #[alias = "spe"]
    Spe,
}

impl Stat {
    /// All stats, in display order.
    pub const ALL: [Stat; 6] = [
        Stat::HP,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spe,
    ];
}

fn next_stat_for_iterator(stat: Stat) -> Option<Stat> {
    match stat {
        Stat::HP => Some(Stat::Atk),
        Stat::Atk => Some(Stat::Def),
        Stat::Def => Some(Stat::SpAtk),
        Stat::SpAtk => Some(Stat::SpDef),
        Stat::SpDef => Some(Stat::Spe),
        Stat::Spe => None,
    }
}

/// Iterator over the entries of a [`StatTable`].
pub struct StatTableEntries<'s> {
    table: &'s StatTable,
    next_stat: Option<Stat>,
}

impl<'s> StatTableEntries<'s> {
    fn new(table: &'s StatTable) -> Self {
        Self {
            table,
            next_stat: Some(Stat::HP),
        }
    }
}

impl<'s> Iterator for StatTableEntries<'s> {
    type Item = (Stat, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let stat = self.next_stat?;
        let value = self.table.get(stat);
        self.next_stat = next_stat_for_iterator(stat);
        Some((stat, value))
    }
}

/// A table of base stats.
///
/// A stat absent from the source data reads as `0`, which marks the table as incomplete.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u16,
    #[serde(default, rename = "attack", alias = "atk")]
    pub atk: u16,
    #[serde(default, rename = "defense", alias = "def")]
    pub def: u16,
    #[serde(default, rename = "special-attack", alias = "spa")]
    pub spa: u16,
    #[serde(default, rename = "special-defense", alias = "spd")]
    pub spd: u16,
    #[serde(default, rename = "speed", alias = "spe")]
    pub spe: u16,
}

impl StatTable {
    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the given value in the stat table.
    pub fn set(&mut self, stat: Stat, value: u16) {
        let stat = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *stat = value;
    }

    /// Creates an iterator over all stat entries.
    pub fn entries<'s>(&'s self) -> StatTableEntries<'s> {
        StatTableEntries::new(self)
    }

    /// Creates an iterator over all stat values.
    pub fn values<'s>(&'s self) -> impl Iterator<Item = u16> + 's {
        self.entries().map(|(_, value)| value)
    }

    /// Checks if any stat is `0`, meaning the stats have not been fully loaded.
    pub fn is_incomplete(&self) -> bool {
        self.values().any(|value| value == 0)
    }
}

impl FromIterator<(Stat, u16)> for StatTable {
    fn from_iter<T: IntoIterator<Item = (Stat, u16)>>(iter: T) -> Self {
        let mut out = StatTable::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}

impl<'s> IntoIterator for &'s StatTable {
    type IntoIter = StatTableEntries<'s>;
    type Item = (Stat, u16);
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}


#[cfg(test)]
mod stat_table_test {
    use crate::{
        Stat,
        StatTable,
    };

    #[test]
    fn deserializes_api_names_with_missing_stats() {
        let table = serde_json::from_str::<StatTable>(
            r#"{"hp":45,"attack":49,"special-defense":65}"#,
        )
        .unwrap();
        pretty_assertions::assert_eq!(
            table,
            StatTable {
                hp: 45,
                atk: 49,
                def: 0,
                spa: 0,
                spd: 65,
                spe: 0,
            }
        );
        assert!(table.is_incomplete());
    }

    #[test]
    fn gets_and_sets_associated_value() {
        let mut st = StatTable::default();
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            st.set(stat, (i as u16 + 1) * 10);
        }
        assert_eq!(st.get(Stat::HP), 10);
        assert_eq!(st.get(Stat::Atk), 20);
        assert_eq!(st.get(Stat::Def), 30);
        assert_eq!(st.get(Stat::SpAtk), 40);
        assert_eq!(st.get(Stat::SpDef), 50);
        assert_eq!(st.get(Stat::Spe), 60);
        assert!(!st.is_incomplete());
    }

    #[test]
    fn entries_follow_display_order() {
        let st = StatTable::from_iter([
            (Stat::HP, 108),
            (Stat::Atk, 130),
            (Stat::Def, 95),
            (Stat::SpAtk, 80),
            (Stat::SpDef, 85),
            (Stat::Spe, 102),
        ]);
        assert_eq!(
            st.entries().map(|(stat, _)| stat).collect::<Vec<_>>(),
            Stat::ALL
        );
    }
}
