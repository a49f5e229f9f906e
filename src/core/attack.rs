//! Attack records: the backend's raw rows and the normalized form

use crate::core::{column, CardId, EnergyCost};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Damage column as stored by the backend
///
/// Older rows hold text such as "30+" or "×2", newer rows a plain number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDamage {
    Number(i64),
    Text(String),
}

impl fmt::Display for RawDamage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawDamage::Number(n) => write!(f, "{n}"),
            RawDamage::Text(s) => write!(f, "{s}"),
        }
    }
}

/// An attack row from the `card_attacks` table, in either shape
///
/// Canonical rows carry `attack_name` and `energy_symbols`. Legacy rows
/// carry `name` ("RR Mega Punch": cost token, then the attack name) and
/// `cost` ("RR"). Every column is optional, and a column holding `null` or a
/// value of the wrong type decodes as absent, so a partially filled or
/// malformed row still deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawAttack {
    #[serde(default, deserialize_with = "column::or_default")]
    pub id: i64,

    #[serde(default, deserialize_with = "column::or_default")]
    pub card_id: CardId,

    /// Position of the attack on the card (fetch order)
    #[serde(
        default,
        deserialize_with = "column::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub attack_order: Option<i32>,

    // Canonical shape
    #[serde(
        default,
        deserialize_with = "column::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub attack_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "column::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub energy_symbols: Option<EnergyCost>,

    #[serde(
        default,
        deserialize_with = "column::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub energy_cost_total: Option<u32>,

    // Legacy shape
    #[serde(
        default,
        deserialize_with = "column::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "column::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost: Option<String>,

    // Both shapes
    #[serde(
        default,
        deserialize_with = "damage_column",
        skip_serializing_if = "Option::is_none"
    )]
    pub damage: Option<RawDamage>,

    #[serde(
        default,
        deserialize_with = "column::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub effect: Option<String>,
}

/// Damage is text or a number; fractional numbers are truncated
fn damage_column<'de, D>(deserializer: D) -> Result<Option<RawDamage>, D::Error>
where
    D: Deserializer<'de>,
{
    let damage = match Value::deserialize(deserializer)? {
        Value::String(s) => Some(RawDamage::Text(s)),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .map(RawDamage::Number),
        _ => None,
    };
    Ok(damage)
}

impl RawAttack {
    /// Build a legacy-shaped row
    pub fn legacy(name: &str, cost: &str, damage: Option<&str>) -> Self {
        RawAttack {
            name: Some(name.to_string()),
            cost: Some(cost.to_string()),
            damage: damage.map(|d| RawDamage::Text(d.to_string())),
            ..RawAttack::default()
        }
    }

    /// True when both canonical fields are present and non-empty
    pub fn is_canonical(&self) -> bool {
        let has_name = self.attack_name.as_deref().is_some_and(|n| !n.is_empty());
        let has_symbols = self.energy_symbols.as_ref().is_some_and(|s| !s.is_empty());
        has_name && has_symbols
    }
}

/// A normalized attack, ready for display
///
/// `energy_cost_total` always equals `energy_symbols.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub id: i64,
    pub card_id: CardId,
    pub attack_name: String,
    pub energy_cost_total: u32,
    pub energy_symbols: EnergyCost,
    pub damage: Option<i64>,
    pub effect_text: Option<String>,
}

impl Attack {
    /// Re-express this attack as a canonical backend row
    pub fn to_raw(&self) -> RawAttack {
        RawAttack {
            id: self.id,
            card_id: self.card_id.clone(),
            attack_order: None,
            attack_name: Some(self.attack_name.clone()),
            energy_symbols: Some(self.energy_symbols.clone()),
            energy_cost_total: Some(self.energy_cost_total),
            name: None,
            cost: None,
            damage: self.damage.map(RawDamage::Number),
            effect: self.effect_text.clone(),
        }
    }
}
