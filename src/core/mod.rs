//! Core catalog types

pub mod attack;
pub mod card;
pub(crate) mod column;
pub mod energy;
pub mod types;

pub use attack::{Attack, RawAttack, RawDamage};
pub use card::{Ability, Card, CardSet};
pub use energy::{EnergyCost, EnergySymbol};
pub use types::{CardId, SetCode};
