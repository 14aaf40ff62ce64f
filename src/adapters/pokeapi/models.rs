//! PokeAPI v2 wire types.
//!
//! Only the fields the catalog uses are modeled; serde ignores the rest.

use serde::Deserialize;

use crate::domain::errors::DexError;
use crate::domain::models::{CatalogEntry, Record, SpriteUris, Stat};

/// `GET /pokemon?limit=&offset=` body.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    /// Entries in list order.
    pub results: Vec<ListItem>,
}

/// One index row.
#[derive(Debug, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub url: String,
}

impl From<ListItem> for CatalogEntry {
    fn from(item: ListItem) -> Self {
        Self::new(item.name, item.url)
    }
}

/// `{ name, url }` reference; only the name is kept.
#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Official artwork sprite.
#[derive(Debug, Default, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

/// Sprite URLs; either may be null.
#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub kind: NamedResource,
}

/// Response of `GET /pokemon/{id or name}`.
#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

impl TryFrom<PokemonResponse> for Record {
    type Error = DexError;

    fn try_from(wire: PokemonResponse) -> Result<Self, Self::Error> {
        if wire.id == 0 {
            return Err(DexError::InvalidRecord(format!(
                "record '{}' has id 0",
                wire.name
            )));
        }

        Ok(Self {
            id: wire.id,
            name: wire.name,
            height: wire.height,
            weight: wire.weight,
            sprites: SpriteUris {
                primary: wire.sprites.front_default.unwrap_or_default(),
                artwork: wire
                    .sprites
                    .other
                    .official_artwork
                    .front_default
                    .unwrap_or_default(),
            },
            categories: wire.types.into_iter().map(|t| t.kind.name).collect(),
            stats: wire
                .stats
                .into_iter()
                .map(|s| Stat::new(s.stat.name, u16::try_from(s.base_stat).unwrap_or(u16::MAX)))
                .collect(),
            abilities: wire.abilities.into_iter().map(|a| a.ability.name).collect(),
            moves: wire.moves.into_iter().map(|m| m.kind.name).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": "https://img/25.png",
            "other": { "official-artwork": { "front_default": "https://img/art/25.png" } }
        },
        "types": [ { "slot": 1, "type": { "name": "electric", "url": "https://x/type/13/" } } ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed" } }
        ],
        "abilities": [ { "ability": { "name": "static" } }, { "ability": { "name": "lightning-rod" } } ],
        "moves": [ { "move": { "name": "mega-punch" } }, { "move": { "name": "pay-day" } } ]
    }"#;

    #[test]
    fn test_pokemon_response_to_record() {
        let wire: PokemonResponse = serde_json::from_str(PIKACHU).unwrap();
        let record = Record::try_from(wire).unwrap();

        assert_eq!(record.id, 25);
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.height, 4);
        assert_eq!(record.weight, 60);
        assert_eq!(record.sprites.primary, "https://img/25.png");
        assert_eq!(record.sprites.artwork, "https://img/art/25.png");
        assert_eq!(record.categories, vec!["electric"]);
        assert_eq!(record.stats[1], Stat::new("speed", 90));
        assert_eq!(record.abilities, vec!["static", "lightning-rod"]);
        assert_eq!(record.moves, vec!["mega-punch", "pay-day"]);
    }

    #[test]
    fn test_missing_sprites_are_empty() {
        let wire: PokemonResponse =
            serde_json::from_str(r#"{"id": 1, "name": "bulbasaur", "sprites": {"front_default": null}}"#)
                .unwrap();
        let record = Record::try_from(wire).unwrap();
        assert!(record.sprites.primary.is_empty());
        assert!(record.sprites.artwork.is_empty());
    }

    #[test]
    fn test_zero_id_rejected() {
        let wire: PokemonResponse = serde_json::from_str(r#"{"id": 0, "name": "missingno"}"#).unwrap();
        assert!(matches!(
            Record::try_from(wire),
            Err(DexError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_list_item_to_entry() {
        let list: ListResponse = serde_json::from_str(
            r#"{"count": 1302, "next": null, "previous": null,
                "results": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}]}"#,
        )
        .unwrap();
        let entries: Vec<CatalogEntry> = list.results.into_iter().map(Into::into).collect();
        assert_eq!(entries[0].name, "bulbasaur");
        assert_eq!(entries[0].id(), 1);
    }
}
