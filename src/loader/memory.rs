//! In-memory catalog built from a JSON table dump
//!
//! Serves the same queries as the hosted backend, including its ordering
//! rules, from tables held in memory. Used by tests and by callers that
//! already hold the rows.

use crate::core::{Ability, Card, CardId, CardSet, RawAttack, SetCode};
use crate::loader::CatalogSource;
use crate::{CatalogError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Row dump of the four catalog tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDump {
    #[serde(default)]
    pub sets: Vec<CardSet>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub attacks: Vec<RawAttack>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

#[derive(Debug, Default)]
struct Tables {
    sets: Vec<CardSet>,
    cards: Vec<Card>,
    attacks: Vec<RawAttack>,
    abilities: Vec<Ability>,
    /// Card id -> index into `cards`
    card_index: FxHashMap<CardId, usize>,
}

/// Catalog source over in-memory tables
///
/// Immutable once built; clones share the tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tables: Arc<Tables>,
}

impl MemoryCatalog {
    /// Build from a dump, rejecting duplicate card ids
    pub fn from_dump(dump: CatalogDump) -> Result<Self> {
        let mut card_index = FxHashMap::default();
        for (i, card) in dump.cards.iter().enumerate() {
            if card_index.insert(card.id.clone(), i).is_some() {
                return Err(CatalogError::InvalidRecord(format!(
                    "duplicate card id '{}'",
                    card.id
                )));
            }
        }

        Ok(MemoryCatalog {
            tables: Arc::new(Tables {
                sets: dump.sets,
                cards: dump.cards,
                attacks: dump.attacks,
                abilities: dump.abilities,
                card_index,
            }),
        })
    }

    /// Parse a dump from its JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let dump: CatalogDump = serde_json::from_str(json)?;
        Self::from_dump(dump)
    }

    /// Load a dump from a JSON file
    pub async fn load_from_file(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(CatalogError::IoError)?;

        Self::from_json(&contents).map_err(|e| {
            CatalogError::InvalidRecord(format!(
                "Failed to load catalog dump '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Number of cards held
    pub fn len(&self) -> usize {
        self.tables.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.cards.is_empty()
    }

    fn lookup_card(&self, id: &CardId) -> Option<&Card> {
        self.tables
            .card_index
            .get(id)
            .map(|&i| &self.tables.cards[i])
    }
}

impl CatalogSource for MemoryCatalog {
    async fn sets(&self) -> Result<Vec<CardSet>> {
        let mut sets = self.tables.sets.clone();
        sets.sort_by(|a, b| b.release_date.cmp(&a.release_date));
        Ok(sets)
    }

    async fn set(&self, code: &SetCode) -> Result<Option<CardSet>> {
        Ok(self.tables.sets.iter().find(|s| &s.id == code).cloned())
    }

    async fn cards_in_set(&self, code: &SetCode) -> Result<Vec<Card>> {
        let mut cards: Vec<Card> = self
            .tables
            .cards
            .iter()
            .filter(|c| &c.set_code == code)
            .cloned()
            .collect();
        cards.sort_by_key(|c| c.card_number);
        Ok(cards)
    }

    async fn card(&self, id: &CardId) -> Result<Option<Card>> {
        Ok(self.lookup_card(id).cloned())
    }

    async fn raw_attacks(&self, card_id: &CardId) -> Result<Vec<RawAttack>> {
        let mut attacks: Vec<RawAttack> = self
            .tables
            .attacks
            .iter()
            .filter(|a| &a.card_id == card_id)
            .cloned()
            .collect();
        // Rows without an order sort last, as NULLs do in an ascending query
        attacks.sort_by_key(|a| (a.attack_order.is_none(), a.attack_order));
        Ok(attacks)
    }

    async fn abilities(&self, card_id: &CardId) -> Result<Vec<Ability>> {
        Ok(self
            .tables
            .abilities
            .iter()
            .filter(|a| &a.card_id == card_id)
            .cloned()
            .collect())
    }

    async fn printings(&self, card_name: &str, exclude: &CardId) -> Result<Vec<Card>> {
        let mut cards: Vec<Card> = self
            .tables
            .cards
            .iter()
            .filter(|c| c.card_name == card_name && &c.id != exclude)
            .cloned()
            .collect();
        cards.sort_by(|a, b| a.set_code.cmp(&b.set_code));
        Ok(cards)
    }
}
