//! Attack normalization
//!
//! The `card_attacks` table holds rows in two shapes. Newer rows are already
//! split into `attack_name` / `energy_symbols`; older rows pack the cost token
//! and the attack name into one `name` string and the cost into a `cost`
//! string. `normalize_attack` turns either into an [`Attack`].
//!
//! Normalization is total: missing or malformed fields become defaults
//! (empty name, no symbols, no damage) so one bad row never breaks a page.

use crate::core::{Attack, EnergyCost, RawAttack, RawDamage};
use nom::character::complete::{digit1, one_of};
use nom::combinator::{opt, recognize};
use nom::sequence::pair;
use nom::IResult;

/// Normalize a single raw attack row
pub fn normalize_attack(raw: RawAttack) -> Attack {
    if raw.is_canonical() {
        normalize_canonical(raw)
    } else {
        normalize_legacy(raw)
    }
}

/// Normalize a sequence of rows, preserving their order
pub fn normalize_attacks(raws: impl IntoIterator<Item = RawAttack>) -> Vec<Attack> {
    raws.into_iter().map(normalize_attack).collect()
}

/// Extract the leading integer of a legacy damage string
///
/// "30" and "30+" give 30; "", "×2" and "+30" give None. A digit run too
/// large for `i64` also gives None.
pub fn parse_leading_damage(text: &str) -> Option<i64> {
    let (_, digits) = leading_digits(text).ok()?;
    digits.parse().ok()
}

/// Extract the leading signed integer of a canonical damage string
///
/// Leading whitespace is skipped and one sign is allowed, so " -10" gives -10
/// and "+30+" gives 30.
fn parse_leading_integer(text: &str) -> Option<i64> {
    let (_, digits) = signed_digits(text.trim_start()).ok()?;
    digits.parse().ok()
}

fn leading_digits(input: &str) -> IResult<&str, &str> {
    digit1(input)
}

fn signed_digits(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

/// An empty effect is no effect
fn effect_text(effect: Option<String>) -> Option<String> {
    effect.filter(|e| !e.is_empty())
}

fn normalize_canonical(raw: RawAttack) -> Attack {
    let energy_symbols = raw.energy_symbols.unwrap_or_default();

    // The stored total is redundant with the symbol list; the list wins.
    let energy_cost_total = energy_symbols.total();

    let damage = match raw.damage {
        Some(RawDamage::Number(n)) => Some(n),
        Some(RawDamage::Text(s)) => parse_leading_integer(&s),
        None => None,
    };

    Attack {
        id: raw.id,
        card_id: raw.card_id,
        attack_name: raw.attack_name.unwrap_or_default(),
        energy_cost_total,
        energy_symbols,
        damage,
        effect_text: effect_text(raw.effect),
    }
}

fn normalize_legacy(raw: RawAttack) -> Attack {
    let attack_name = raw.name.as_deref().map(legacy_attack_name).unwrap_or_default();
    let energy_symbols = EnergyCost::from_cost_string(raw.cost.as_deref().unwrap_or(""));

    let damage = match raw.damage {
        Some(RawDamage::Number(n)) => Some(n),
        Some(RawDamage::Text(s)) => parse_leading_damage(&s),
        None => None,
    };

    Attack {
        id: raw.id,
        card_id: raw.card_id,
        attack_name,
        energy_cost_total: energy_symbols.total(),
        energy_symbols,
        damage,
        effect_text: effect_text(raw.effect),
    }
}

/// "RR Mega Punch" -> "Mega Punch"
///
/// The first token repeats the cost and is dropped. Runs of whitespace
/// separate tokens, but whitespace at either end yields an empty first or
/// last token, so " RR Mega Punch" keeps its cost token. A name with nothing
/// left after the first token is returned verbatim.
fn legacy_attack_name(name: &str) -> String {
    let pieces: Vec<&str> = name.split(char::is_whitespace).collect();
    let last = pieces.len() - 1;
    let tokens: Vec<&str> = pieces
        .iter()
        .enumerate()
        .filter(|&(i, piece)| !piece.is_empty() || i == 0 || i == last)
        .map(|(_, piece)| *piece)
        .collect();

    let rest = tokens[1..].join(" ");
    if rest.is_empty() {
        name.to_string()
    } else {
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, EnergySymbol};

    fn symbols(attack: &Attack) -> Vec<&str> {
        attack.energy_symbols.iter().map(EnergySymbol::as_str).collect()
    }

    #[test]
    fn test_parse_leading_damage() {
        assert_eq!(parse_leading_damage("30"), Some(30));
        assert_eq!(parse_leading_damage("30+"), Some(30));
        assert_eq!(parse_leading_damage("120×"), Some(120));
        assert_eq!(parse_leading_damage(""), None);
        assert_eq!(parse_leading_damage("×2"), None);
        assert_eq!(parse_leading_damage("+30"), None);
        assert_eq!(parse_leading_damage(" 30"), None);
        assert_eq!(parse_leading_damage("-10"), None);
        assert_eq!(parse_leading_damage("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_leading_integer() {
        assert_eq!(parse_leading_integer("30+"), Some(30));
        assert_eq!(parse_leading_integer("-10"), Some(-10));
        assert_eq!(parse_leading_integer("+30"), Some(30));
        assert_eq!(parse_leading_integer("  40×"), Some(40));
        assert_eq!(parse_leading_integer("- 10"), None);
        assert_eq!(parse_leading_integer("×2"), None);
        assert_eq!(parse_leading_integer(""), None);
    }

    #[test]
    fn test_legacy_name_drops_cost_token() {
        assert_eq!(legacy_attack_name("RR Mega Punch"), "Mega Punch");
        assert_eq!(legacy_attack_name("C  Tackle"), "Tackle");
        assert_eq!(legacy_attack_name("R"), "R");
        assert_eq!(legacy_attack_name(""), "");
    }

    #[test]
    fn test_legacy_name_edge_whitespace() {
        // A leading space makes the cost token the second token
        assert_eq!(legacy_attack_name(" RR Mega Punch"), "RR Mega Punch");
        assert_eq!(legacy_attack_name("RR Mega Punch "), "Mega Punch ");
        assert_eq!(legacy_attack_name("R "), "R ");
        assert_eq!(legacy_attack_name("  "), "  ");
    }

    #[test]
    fn test_legacy_vine_whip() {
        let raw = RawAttack {
            id: 7,
            card_id: CardId::new("SVI-001"),
            ..RawAttack::legacy("RC Vine Whip", "RC", Some("35"))
        };

        let attack = normalize_attack(raw);
        assert_eq!(attack.id, 7);
        assert_eq!(attack.card_id.as_str(), "SVI-001");
        assert_eq!(attack.attack_name, "Vine Whip");
        assert_eq!(symbols(&attack), vec!["R", "C"]);
        assert_eq!(attack.energy_cost_total, 2);
        assert_eq!(attack.damage, Some(35));
        assert_eq!(attack.effect_text, None);
    }

    #[test]
    fn test_legacy_missing_fields_degrade() {
        let attack = normalize_attack(RawAttack::default());
        assert_eq!(attack.attack_name, "");
        assert!(attack.energy_symbols.is_empty());
        assert_eq!(attack.energy_cost_total, 0);
        assert_eq!(attack.damage, None);
        assert_eq!(attack.effect_text, None);
    }

    #[test]
    fn test_legacy_numeric_damage() {
        let raw = RawAttack {
            damage: Some(RawDamage::Number(60)),
            ..RawAttack::legacy("CC Headbutt", "CC", None)
        };
        assert_eq!(normalize_attack(raw).damage, Some(60));
    }

    #[test]
    fn test_canonical_copies_fields() {
        let raw: RawAttack = serde_json::from_str(
            r#"{
                "id": 3,
                "card_id": "SVI-006",
                "attack_name": "Ember",
                "energy_symbols": ["R", "C"],
                "energy_cost_total": 2,
                "damage": "30+",
                "effect": "Discard an Energy from this Pokemon."
            }"#,
        )
        .unwrap();

        let attack = normalize_attack(raw);
        assert_eq!(attack.attack_name, "Ember");
        assert_eq!(symbols(&attack), vec!["R", "C"]);
        assert_eq!(attack.energy_cost_total, 2);
        assert_eq!(attack.damage, Some(30));
        assert_eq!(
            attack.effect_text.as_deref(),
            Some("Discard an Energy from this Pokemon.")
        );
    }

    #[test]
    fn test_canonical_total_follows_symbols() {
        let raw: RawAttack = serde_json::from_str(
            r#"{"id": 1, "attack_name": "Ember", "energy_symbols": ["R", "R", "C"]}"#,
        )
        .unwrap();
        assert_eq!(normalize_attack(raw).energy_cost_total, 3);

        let raw: RawAttack = serde_json::from_str(
            r#"{"id": 1, "attack_name": "Ember", "energy_symbols": ["R"], "energy_cost_total": 4}"#,
        )
        .unwrap();
        assert_eq!(normalize_attack(raw).energy_cost_total, 1);
    }

    #[test]
    fn test_canonical_unparseable_damage_is_absent() {
        let raw: RawAttack = serde_json::from_str(
            r#"{"id": 1, "attack_name": "Double Hit", "energy_symbols": ["C"], "damage": "×2"}"#,
        )
        .unwrap();
        assert_eq!(normalize_attack(raw).damage, None);
    }

    #[test]
    fn test_canonical_signed_damage() {
        let damage = |json: &str| {
            let row = format!(
                r#"{{"id": 1, "attack_name": "Recoil", "energy_symbols": ["C"], "damage": {json}}}"#
            );
            let raw: RawAttack = serde_json::from_str(&row).unwrap();
            normalize_attack(raw).damage
        };
        assert_eq!(damage("-10"), Some(-10));
        assert_eq!(damage(r#""-10""#), Some(-10));
        assert_eq!(damage(r#""+30""#), Some(30));
        assert_eq!(damage(r#"" 20+""#), Some(20));
        assert_eq!(damage("30.0"), Some(30));
    }

    #[test]
    fn test_empty_effect_is_absent() {
        let raw: RawAttack = serde_json::from_str(
            r#"{"id": 1, "attack_name": "Ember", "energy_symbols": ["R"], "effect": ""}"#,
        )
        .unwrap();
        assert_eq!(normalize_attack(raw).effect_text, None);

        let raw = RawAttack {
            effect: Some(String::new()),
            ..RawAttack::legacy("C Tackle", "C", Some("10"))
        };
        assert_eq!(normalize_attack(raw).effect_text, None);
    }

    #[test]
    fn test_malformed_columns_degrade_per_field() {
        let raw: RawAttack = serde_json::from_str(
            r#"{
                "id": 8,
                "attack_name": "Flare",
                "energy_symbols": ["R", "C"],
                "energy_cost_total": -1,
                "damage": 30.0
            }"#,
        )
        .unwrap();

        let attack = normalize_attack(raw);
        assert_eq!(attack.attack_name, "Flare");
        assert_eq!(attack.energy_cost_total, 2);
        assert_eq!(attack.damage, Some(30));
    }

    #[test]
    fn test_empty_symbols_fall_back_to_legacy() {
        let raw = RawAttack {
            attack_name: Some("Ember".to_string()),
            energy_symbols: Some(EnergyCost::new()),
            ..RawAttack::legacy("R Ember", "R", Some("30"))
        };

        let attack = normalize_attack(raw);
        assert_eq!(attack.attack_name, "Ember");
        assert_eq!(symbols(&attack), vec!["R"]);
        assert_eq!(attack.damage, Some(30));
    }

    #[test]
    fn test_normalize_attacks_preserves_order() {
        let raws = vec![
            RawAttack { id: 2, ..RawAttack::legacy("C Tackle", "C", Some("10")) },
            RawAttack { id: 1, ..RawAttack::legacy("CC Slam", "CC", Some("40")) },
        ];
        let ids: Vec<i64> = normalize_attacks(raws).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
