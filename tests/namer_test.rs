//! Tests for Italian number names.

use strictly_numeri::{Challenge, italian_name, name_integer};

fn name(n: u8) -> String {
    italian_name(&Challenge::integer(n).unwrap())
}

#[test]
fn test_base_cases() {
    assert_eq!(name(0), "zero");
    assert_eq!(name(100), "cento");
}

#[test]
fn test_elision_and_accent() {
    assert_eq!(name(21), "ventuno");
    assert_eq!(name(28), "ventotto");
    assert_eq!(name(23), "ventitré");
    assert_eq!(name(81), "ottantuno");
    assert_eq!(name(98), "novantotto");
    assert_eq!(name(33), "trentatré");
}

#[test]
fn test_plain_compounds() {
    assert_eq!(name(20), "venti");
    assert_eq!(name(42), "quarantadue");
    assert_eq!(name(57), "cinquantasette");
    assert_eq!(name(99), "novantanove");
}

#[test]
fn test_lookup_table_below_twenty() {
    let expected = [
        "uno",
        "due",
        "tre",
        "quattro",
        "cinque",
        "sei",
        "sette",
        "otto",
        "nove",
        "dieci",
        "undici",
        "dodici",
        "tredici",
        "quattordici",
        "quindici",
        "sedici",
        "diciassette",
        "diciotto",
        "diciannove",
    ];
    for (n, word) in (1u8..=19).zip(expected) {
        assert_eq!(name(n), word, "name({})", n);
    }
}

#[test]
fn test_decimal_reads_group_as_whole_number() {
    let challenge: Challenge = "1.55".parse().unwrap();
    assert_eq!(italian_name(&challenge), "uno virgola cinquantacinque");

    let challenge = Challenge::decimal(23, 3).unwrap();
    assert_eq!(italian_name(&challenge), "ventitré virgola tre");
}

#[test]
fn test_decimal_trailing_zero_dropped() {
    let challenge = Challenge::decimal(5, 10).unwrap();
    assert_eq!(challenge.digits('.'), "5.1");
    assert_eq!(italian_name(&challenge), "cinque virgola uno");
}

#[test]
fn test_parsed_trailing_zero_matches_drawn_challenge() {
    assert_eq!("5.10".parse::<Challenge>(), Challenge::decimal(5, 1));
    assert_eq!("5.0".parse::<Challenge>(), Challenge::integer(5));

    let parsed: Challenge = "5,10".parse().unwrap();
    assert_eq!(italian_name(&parsed), "cinque virgola uno");
}

#[test]
fn test_every_name_is_lowercase_ascii_or_accent() {
    for n in 0..=100u8 {
        let word = name_integer(n).unwrap();
        assert!(!word.is_empty());
        assert!(
            word.chars().all(|c| c.is_ascii_lowercase() || c == 'é'),
            "{} -> {}",
            n,
            word
        );
    }
}
