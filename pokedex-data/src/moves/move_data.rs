use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    MoveCategory,
    Type,
};

/// Data about a particular move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move type.
    pub primary_type: Type,
    /// Base power.
    ///
    /// `0` means the move deals no direct damage.
    #[serde(default)]
    pub base_power: u32,
}

impl MoveData {
    /// Checks if the move deals direct damage, based on its category and base power.
    pub fn deals_direct_damage(&self) -> bool {
        self.category != MoveCategory::Status && self.base_power > 0
    }
}

#[cfg(test)]
mod move_data_test {
    use crate::{
        MoveCategory,
        MoveData,
        Type,
    };

    #[test]
    fn deserializes_without_base_power() {
        let str = r#"{"name":"Growl","category":"Status","primary_type":"Normal"}"#;
        let move_data = serde_json::from_str::<MoveData>(str).unwrap();
        pretty_assertions::assert_eq!(
            move_data,
            MoveData {
                name: "Growl".to_owned(),
                category: MoveCategory::Status,
                primary_type: Type::Normal,
                base_power: 0,
            }
        );
        assert!(!move_data.deals_direct_damage());
    }

    #[test]
    fn damaging_moves_need_power() {
        let mut move_data = MoveData {
            name: "Tackle".to_owned(),
            category: MoveCategory::Physical,
            primary_type: Type::Normal,
            base_power: 40,
        };
        assert!(move_data.deals_direct_damage());
        move_data.base_power = 0;
        assert!(!move_data.deals_direct_damage());
    }
}
