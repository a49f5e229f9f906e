//! REST client for the hosted catalog database
//!
//! The backend exposes each table at `{base}/rest/v1/{table}` and takes
//! PostgREST-style query parameters (`column=eq.value`, `order=column.asc`).
//! The anon key is sent both as `apikey` and as a bearer token.

use crate::core::{Ability, Card, CardId, CardSet, RawAttack, SetCode};
use crate::loader::{BackendConfig, CatalogSource};
use crate::{CatalogError, Result};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::Value;

const SETS_TABLE: &str = "card_sets";
const CARDS_TABLE: &str = "cards";
const ATTACKS_TABLE: &str = "card_attacks";
const ABILITIES_TABLE: &str = "card_abilities";

/// Sort direction of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A single-table select
#[derive(Debug, Clone)]
pub struct TableQuery {
    table: &'static str,
    filters: Vec<(String, String)>,
    order: Option<(&'static str, Direction)>,
    limit: Option<usize>,
}

impl TableQuery {
    pub fn select(table: &'static str) -> Self {
        TableQuery {
            table,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn eq(mut self, column: &str, value: impl AsRef<str>) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.as_ref())));
        self
    }

    pub fn neq(mut self, column: &str, value: impl AsRef<str>) -> Self {
        self.filters
            .push((column.to_string(), format!("neq.{}", value.as_ref())));
        self
    }

    pub fn order(mut self, column: &'static str, direction: Direction) -> Self {
        self.order = Some((column, direction));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn table(&self) -> &str {
        self.table
    }

    /// Query-string parameters, in a stable order
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(self.filters.iter().cloned());
        if let Some((column, direction)) = self.order {
            let dir = match direction {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            };
            params.push(("order".to_string(), format!("{column}.{dir}")));
        }
        if let Some(n) = self.limit {
            params.push(("limit".to_string(), n.to_string()));
        }
        params
    }
}

/// Catalog source backed by the hosted database
///
/// Constructed explicitly from a [`BackendConfig`] and passed to whoever
/// needs it. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct RestCatalog {
    http: reqwest::Client,
    base: String,
    anon_key: String,
}

impl RestCatalog {
    pub fn new(config: &BackendConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &BackendConfig) -> Self {
        RestCatalog {
            http,
            base: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Endpoint URL of a table
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base, table)
    }

    async fn fetch<T: DeserializeOwned>(&self, query: TableQuery) -> Result<Vec<T>> {
        let url = self.table_url(query.table());
        tracing::debug!(table = query.table(), params = ?query.params(), "catalog query");

        let resp = self
            .http
            .get(url)
            .query(&query.params())
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.anon_key))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CatalogError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let rows = resp.json::<Vec<Value>>().await?;
        Ok(decode_rows(query.table(), rows))
    }

    async fn fetch_one<T: DeserializeOwned>(&self, query: TableQuery) -> Result<Option<T>> {
        let rows = self.fetch(query.limit(1)).await?;
        Ok(rows.into_iter().next())
    }
}

/// Decode rows one at a time; a row that does not fit `T` is skipped
fn decode_rows<T: DeserializeOwned>(table: &str, rows: Vec<Value>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(table, error = %e, "skipping malformed row");
                None
            }
        })
        .collect()
}

impl CatalogSource for RestCatalog {
    async fn sets(&self) -> Result<Vec<CardSet>> {
        self.fetch(TableQuery::select(SETS_TABLE).order("release_date", Direction::Desc))
            .await
    }

    async fn set(&self, code: &SetCode) -> Result<Option<CardSet>> {
        self.fetch_one(TableQuery::select(SETS_TABLE).eq("id", code.as_str()))
            .await
    }

    async fn cards_in_set(&self, code: &SetCode) -> Result<Vec<Card>> {
        self.fetch(
            TableQuery::select(CARDS_TABLE)
                .eq("set_code", code.as_str())
                .order("card_number", Direction::Asc),
        )
        .await
    }

    async fn card(&self, id: &CardId) -> Result<Option<Card>> {
        self.fetch_one(TableQuery::select(CARDS_TABLE).eq("id", id.as_str()))
            .await
    }

    async fn raw_attacks(&self, card_id: &CardId) -> Result<Vec<RawAttack>> {
        self.fetch(
            TableQuery::select(ATTACKS_TABLE)
                .eq("card_id", card_id.as_str())
                .order("attack_order", Direction::Asc),
        )
        .await
    }

    async fn abilities(&self, card_id: &CardId) -> Result<Vec<Ability>> {
        self.fetch(TableQuery::select(ABILITIES_TABLE).eq("card_id", card_id.as_str()))
            .await
    }

    async fn printings(&self, card_name: &str, exclude: &CardId) -> Result<Vec<Card>> {
        self.fetch(
            TableQuery::select(CARDS_TABLE)
                .eq("card_name", card_name)
                .neq("id", exclude.as_str())
                .order("set_code", Direction::Asc),
        )
        .await
    }
}
