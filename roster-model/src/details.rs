//! Per-item detail record as served by the detail endpoint.

/// Name plus link to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedResource {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: String,
}

impl NamedResource {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSlot {
    pub base_stat: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_hidden: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSlot {
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub resource: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeSlot {
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: u8,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub resource: NamedResource,
}

/// Detail record for one item. Arrays missing from the payload decode as
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDetails {
    pub id: u32,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_experience: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Vec<StatSlot>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<AbilitySlot>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub moves: Vec<MoveSlot>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: Vec<TypeSlot>,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_shape() {
        let details: ItemDetails = serde_json::from_str(
            r#"{
                "id": 25,
                "name": "pikachu",
                "base_experience": 112,
                "stats": [
                    {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                    {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}}
                ],
                "abilities": [
                    {"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1},
                    {"ability": {"name": "lightning-rod", "url": ""}, "is_hidden": true, "slot": 3}
                ],
                "moves": [{"move": {"name": "mega-punch", "url": ""}, "version_group_details": []}],
                "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
                "sprites": {}
            }"#,
        )
        .unwrap();

        assert_eq!(details.id, 25);
        assert_eq!(details.stats[1].base_stat, 55);
        assert!(details.abilities[1].is_hidden);
        assert_eq!(details.moves[0].resource.name, "mega-punch");
        assert_eq!(details.types[0].resource.name, "electric");
        assert_eq!(details.height, None);
    }

    #[test]
    fn missing_arrays_are_empty() {
        let details: ItemDetails =
            serde_json::from_str(r#"{"id": 1, "name": "bulbasaur"}"#).unwrap();
        assert!(details.stats.is_empty());
        assert!(details.moves.is_empty());
    }
}
