//! Catalog service
//!
//! Composes source fetches into the views a catalog front end shows: the
//! set list, a set with its cards, and a card with its attacks, abilities
//! and other printings. Secondary lookups degrade to empty results when the
//! source fails, so a card page still renders without its attacks.

use crate::core::{Ability, Attack, Card, CardId, CardSet, SetCode};
use crate::loader::CatalogSource;
use crate::normalize::normalize_attacks;
use crate::Result;
use serde::Serialize;

/// A card paired with its image URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardTile {
    pub card: Card,
    pub image_url: String,
}

impl From<Card> for CardTile {
    fn from(card: Card) -> Self {
        let image_url = card.derived_image_url();
        CardTile { card, image_url }
    }
}

/// A set and all of its cards, by card number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetView {
    pub set: CardSet,
    pub cards: Vec<CardTile>,
}

/// Everything shown for a single card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub card: Card,
    pub image_url: String,
    pub attacks: Vec<Attack>,
    pub abilities: Vec<Ability>,
    /// Same card name in other sets, by set code
    pub equivalents: Vec<CardTile>,
}

impl CardView {
    /// Weakness, resistance and retreat cost only apply to Pokemon
    pub fn is_pokemon(&self) -> bool {
        self.card.is_pokemon()
    }
}

/// Read-only catalog over an injected source
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    source: S,
}

impl<S: CatalogSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Catalog { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// All sets, newest first. Source errors propagate.
    pub async fn sets(&self) -> Result<Vec<CardSet>> {
        self.source.sets().await
    }

    /// A set by code; `None` if missing or the lookup failed
    pub async fn set(&self, code: &SetCode) -> Option<CardSet> {
        match self.source.set(code).await {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(set = %code, error = %e, "set lookup failed");
                None
            }
        }
    }

    /// Cards of a set by number. Source errors propagate.
    pub async fn cards_in_set(&self, code: &SetCode) -> Result<Vec<Card>> {
        self.source.cards_in_set(code).await
    }

    /// A card by id; `None` if missing or the lookup failed
    pub async fn card(&self, id: &CardId) -> Option<Card> {
        match self.source.card(id).await {
            Ok(card) => card,
            Err(e) => {
                tracing::warn!(card = %id, error = %e, "card lookup failed");
                None
            }
        }
    }

    /// Normalized attacks of a card, in attack order
    pub async fn attacks(&self, card_id: &CardId) -> Vec<Attack> {
        match self.source.raw_attacks(card_id).await {
            Ok(raws) => normalize_attacks(raws),
            Err(e) => {
                tracing::warn!(card = %card_id, error = %e, "attack lookup failed");
                Vec::new()
            }
        }
    }

    pub async fn abilities(&self, card_id: &CardId) -> Vec<Ability> {
        match self.source.abilities(card_id).await {
            Ok(abilities) => abilities,
            Err(e) => {
                tracing::warn!(card = %card_id, error = %e, "ability lookup failed");
                Vec::new()
            }
        }
    }

    /// Other printings of `card_name`, excluding `exclude`
    pub async fn equivalent_cards(&self, card_name: &str, exclude: &CardId) -> Vec<Card> {
        match self.source.printings(card_name, exclude).await {
            Ok(cards) => cards,
            Err(e) => {
                tracing::warn!(name = card_name, error = %e, "printing lookup failed");
                Vec::new()
            }
        }
    }

    /// A set with its cards; `Ok(None)` when the set does not exist
    pub async fn set_view(&self, code: &SetCode) -> Result<Option<SetView>> {
        let Some(set) = self.set(code).await else {
            return Ok(None);
        };

        let cards = self.cards_in_set(code).await?;
        tracing::debug!(set = %code, cards = cards.len(), "set view");

        Ok(Some(SetView {
            set,
            cards: cards.into_iter().map(CardTile::from).collect(),
        }))
    }

    /// A card with its attacks, abilities and other printings
    ///
    /// The three secondary lookups run concurrently and never fail the view.
    pub async fn card_view(&self, id: &CardId) -> Result<Option<CardView>> {
        let Some(card) = self.card(id).await else {
            return Ok(None);
        };

        let (attacks, abilities, equivalents) = tokio::join!(
            self.attacks(id),
            self.abilities(id),
            self.equivalent_cards(&card.card_name, id),
        );
        tracing::debug!(
            card = %id,
            attacks = attacks.len(),
            abilities = abilities.len(),
            equivalents = equivalents.len(),
            "card view"
        );

        Ok(Some(CardView {
            image_url: card.derived_image_url(),
            card,
            attacks,
            abilities,
            equivalents: equivalents.into_iter().map(CardTile::from).collect(),
        }))
    }
}
