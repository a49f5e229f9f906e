//! Property tests for attack normalization and image URLs

use proptest::prelude::*;
use tcg_catalog::{
    card_image_url,
    core::{Attack, CardId, EnergyCost, EnergySymbol, RawAttack, RawDamage},
    normalize::parse_leading_damage,
    normalize_attack,
};

fn symbol_strategy() -> impl Strategy<Value = EnergySymbol> {
    prop_oneof![
        Just('R'),
        Just('G'),
        Just('W'),
        Just('L'),
        Just('P'),
        Just('F'),
        Just('D'),
        Just('M'),
        Just('C'),
    ]
    .prop_map(EnergySymbol::from)
}

fn canonical_attack_strategy() -> impl Strategy<Value = Attack> {
    (
        any::<i64>(),
        "[A-Z]{3}-[0-9]{3}",
        "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8}){0,2}",
        proptest::collection::vec(symbol_strategy(), 1..6),
        proptest::option::of(any::<i64>()),
        proptest::option::of("[A-Za-z ,.]{1,40}"),
    )
        .prop_map(|(id, card_id, name, symbols, damage, effect)| {
            let energy_symbols: EnergyCost = symbols.into_iter().collect();
            Attack {
                id,
                card_id: CardId::new(card_id),
                attack_name: name,
                energy_cost_total: energy_symbols.total(),
                energy_symbols,
                damage,
                effect_text: effect,
            }
        })
}

proptest! {
    #[test]
    fn canonical_total_is_symbol_count(
        symbols in proptest::collection::vec(symbol_strategy(), 1..8),
        stored_total in proptest::option::of(0u32..10),
    ) {
        let n = symbols.len() as u32;
        let raw = RawAttack {
            attack_name: Some("Ember".to_string()),
            energy_symbols: Some(symbols.into_iter().collect()),
            energy_cost_total: stored_total,
            ..RawAttack::default()
        };
        prop_assert!(raw.is_canonical());

        let attack = normalize_attack(raw);
        prop_assert_eq!(attack.energy_cost_total, n);
    }

    #[test]
    fn legacy_total_matches_symbols(name in ".{0,30}", cost in ".{0,12}", damage in ".{0,6}") {
        let attack = normalize_attack(RawAttack::legacy(&name, &cost, Some(damage.as_str())));
        prop_assert_eq!(attack.energy_symbols.len() as u32, attack.energy_cost_total);
        prop_assert!(attack.energy_symbols.iter().all(|s| !s.as_str().trim().is_empty()));
    }

    #[test]
    fn normalizing_a_canonical_attack_is_idempotent(attack in canonical_attack_strategy()) {
        let again = normalize_attack(attack.to_raw());
        prop_assert_eq!(again, attack);
    }

    #[test]
    fn leading_damage_ignores_suffix(n in 0u32..100_000, suffix in "[+×x\\-]{0,2}") {
        let text = format!("{n}{suffix}");
        prop_assert_eq!(parse_leading_damage(&text), Some(i64::from(n)));
    }

    #[test]
    fn image_url_pads_without_truncating(n in any::<u32>()) {
        let url = card_image_url("SVI", n);
        let expected = format!("/tpci/SVI/SVI_{n:03}_R_EN.png");
        prop_assert!(url.ends_with(&expected), "{} does not end with {}", url, expected);
    }
}

#[test]
fn test_documented_damage_cases() {
    let damage = |text: Option<&str>| {
        normalize_attack(RawAttack::legacy("C Tackle", "C", text)).damage
    };
    assert_eq!(damage(Some("30")), Some(30));
    assert_eq!(damage(Some("30+")), Some(30));
    assert_eq!(damage(Some("")), None);
    assert_eq!(damage(None), None);
    assert_eq!(damage(Some("×2")), None);
}

#[test]
fn test_documented_name_and_cost_cases() {
    let attack = normalize_attack(RawAttack::legacy("RR Mega Punch", "RRC", None));
    assert_eq!(attack.attack_name, "Mega Punch");
    assert_eq!(attack.energy_symbols.to_string(), "R R C");
    assert_eq!(attack.energy_cost_total, 3);

    let attack = normalize_attack(RawAttack::legacy("R", "R", None));
    assert_eq!(attack.attack_name, "R");

    let attack = normalize_attack(RawAttack::legacy(" RR Mega Punch", "RR", None));
    assert_eq!(attack.attack_name, "RR Mega Punch");
}

#[test]
fn test_numeric_damage_round_trips_through_raw() {
    let raw = RawAttack {
        attack_name: Some("Flamethrower".to_string()),
        energy_symbols: Some(EnergyCost::from_cost_string("RRC")),
        damage: Some(RawDamage::Number(90)),
        ..RawAttack::default()
    };
    let attack = normalize_attack(raw);
    assert_eq!(attack.damage, Some(90));
    assert_eq!(attack.to_raw().damage, Some(RawDamage::Number(90)));
}
