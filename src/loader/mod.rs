//! Record sources
//!
//! A [`CatalogSource`] is the read-only fetch interface of the backend:
//! [`RestCatalog`] talks to the hosted database, [`MemoryCatalog`] serves a
//! JSON table dump held in memory.

pub mod config;
pub mod memory;
pub mod rest;

pub use config::BackendConfig;
pub use memory::{CatalogDump, MemoryCatalog};
pub use rest::RestCatalog;

use crate::core::{Ability, Card, CardId, CardSet, RawAttack, SetCode};
use crate::Result;
use std::future::Future;

/// Read-only access to the catalog tables
///
/// Sources own the ordering of their results; callers never re-sort.
pub trait CatalogSource {
    /// All sets, newest release first
    fn sets(&self) -> impl Future<Output = Result<Vec<CardSet>>> + Send;

    /// The set with the given code, if any
    fn set(&self, code: &SetCode) -> impl Future<Output = Result<Option<CardSet>>> + Send;

    /// Cards of a set, by card number ascending
    fn cards_in_set(&self, code: &SetCode) -> impl Future<Output = Result<Vec<Card>>> + Send;

    /// The card with the given id, if any
    fn card(&self, id: &CardId) -> impl Future<Output = Result<Option<Card>>> + Send;

    /// Raw attack rows of a card, by attack order ascending
    fn raw_attacks(&self, card_id: &CardId)
        -> impl Future<Output = Result<Vec<RawAttack>>> + Send;

    /// Abilities of a card
    fn abilities(&self, card_id: &CardId) -> impl Future<Output = Result<Vec<Ability>>> + Send;

    /// Other printings of a card name, by set code ascending
    fn printings(
        &self,
        card_name: &str,
        exclude: &CardId,
    ) -> impl Future<Output = Result<Vec<Card>>> + Send;
}
