//! Card, set and ability records

use crate::core::{column, CardId, SetCode};
use crate::image::card_image_url;
use serde::{Deserialize, Serialize};

/// A card set (expansion)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    /// Set code, e.g. "SVI"
    pub id: SetCode,

    /// Display name, e.g. "Scarlet & Violet"
    #[serde(default, deserialize_with = "column::null_as_default")]
    pub name: String,

    /// Series the set belongs to
    #[serde(default, deserialize_with = "column::null_as_default")]
    pub series: String,

    #[serde(default, deserialize_with = "column::null_as_default")]
    pub total_cards: u32,

    /// ISO date ("2023-03-31"); sorts chronologically as a string
    #[serde(default, deserialize_with = "column::null_as_default")]
    pub release_date: String,
}

/// A single printing of a card
///
/// Immutable once fetched. Many cards can share a `card_name` across sets;
/// those are the card's equivalent printings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    pub set_code: SetCode,

    /// Collector number within the set
    pub card_number: u32,

    #[serde(default, deserialize_with = "column::null_as_default")]
    pub card_name: String,

    /// "pokemon", "trainer" or "energy"
    #[serde(default, deserialize_with = "column::null_as_default")]
    pub card_type: String,

    /// "Basic", "Stage 1", "Item", ...
    #[serde(default, deserialize_with = "column::null_as_default")]
    pub card_subtype: String,

    #[serde(default, deserialize_with = "column::null_as_default")]
    pub element_type: String,

    #[serde(default, deserialize_with = "column::null_as_default")]
    pub rarity: String,

    #[serde(default)]
    pub hp: Option<u32>,

    #[serde(default)]
    pub weakness: Option<String>,

    #[serde(default)]
    pub resistance: Option<String>,

    #[serde(default)]
    pub retreat_cost: Option<u32>,

    #[serde(default)]
    pub artist: Option<String>,

    /// URL stored by the backend; may be empty. Prefer `derived_image_url`.
    #[serde(default, deserialize_with = "column::null_as_default")]
    pub image_url: String,
}

impl Card {
    /// Image URL derived from this card's set code and number
    pub fn derived_image_url(&self) -> String {
        card_image_url(self.set_code.as_str(), self.card_number)
    }

    pub fn is_pokemon(&self) -> bool {
        self.card_type == "pokemon"
    }
}

/// A card ability, passed through from the backend unmodified
///
/// A `null` effect column reads as an empty effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: i64,
    pub card_id: CardId,
    #[serde(default, deserialize_with = "column::null_as_default")]
    pub ability_name: String,
    #[serde(default, deserialize_with = "column::null_as_default")]
    pub ability_effect: String,
}
