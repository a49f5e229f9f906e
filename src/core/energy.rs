//! Energy costs of attacks

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// One unit of an attack's energy cost
///
/// Legacy records encode each symbol as a single character ("R", "C", "W").
/// Canonical records store the tokens as strings, copied as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnergySymbol(String);

impl EnergySymbol {
    pub fn new(s: impl Into<String>) -> Self {
        EnergySymbol(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnergySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for EnergySymbol {
    fn from(c: char) -> Self {
        EnergySymbol(c.to_string())
    }
}

impl From<&str> for EnergySymbol {
    fn from(s: &str) -> Self {
        EnergySymbol(s.to_string())
    }
}

impl From<String> for EnergySymbol {
    fn from(s: String) -> Self {
        EnergySymbol(s)
    }
}

/// Ordered energy cost (e.g., "RRC" = two Fire + one Colorless)
///
/// Most attacks cost four or fewer energy, so the symbols stay inline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnergyCost(SmallVec<[EnergySymbol; 4]>);

impl EnergyCost {
    pub fn new() -> Self {
        EnergyCost(SmallVec::new())
    }

    /// Parse a legacy cost string, one symbol per non-whitespace character
    ///
    /// Duplicates and punctuation are kept: "R R+" yields ["R", "R", "+"].
    pub fn from_cost_string(s: &str) -> Self {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(EnergySymbol::from)
            .collect()
    }

    /// Total energy required (one per symbol)
    pub fn total(&self) -> u32 {
        u32::try_from(self.0.len()).unwrap_or(u32::MAX)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnergySymbol> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[EnergySymbol] {
        &self.0
    }
}

impl FromIterator<EnergySymbol> for EnergyCost {
    fn from_iter<I: IntoIterator<Item = EnergySymbol>>(iter: I) -> Self {
        EnergyCost(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EnergyCost {
    type Item = &'a EnergySymbol;
    type IntoIter = std::slice::Iter<'a, EnergySymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Symbols separated by spaces ("R R C"), the way a cost line is displayed
impl fmt::Display for EnergyCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
