//! Italian cardinal words for challenge numbers.

use super::challenge::Challenge;
use tracing::instrument;

const UNITS: [&str; 20] = [
    "",
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

const TENS: [&str; 10] = [
    "", "", "venti", "trenta", "quaranta", "cinquanta", "sessanta", "settanta", "ottanta",
    "novanta",
];

/// Word separating the integer part from the fractional group.
pub const DECIMAL_WORD: &str = "virgola";

/// Returns the Italian word form of a challenge.
///
/// The fractional group is read as a whole number:
/// `1.55` is "uno virgola cinquantacinque".
#[instrument]
pub fn italian_name(challenge: &Challenge) -> String {
    let whole = compose(challenge.whole());
    match challenge.fraction() {
        Some(fraction) => format!("{} {} {}", whole, DECIMAL_WORD, compose(fraction)),
        None => whole,
    }
}

/// Returns the Italian word for an integer, or `None` above 100.
pub fn name_integer(n: u8) -> Option<String> {
    (n <= Challenge::MAX_WHOLE).then(|| compose(n))
}

fn compose(n: u8) -> String {
    match n {
        0 => "zero".to_string(),
        100 => "cento".to_string(),
        1..=19 => UNITS[usize::from(n)].to_string(),
        _ => {
            let tens = TENS[usize::from(n / 10)];
            let unit = n % 10;
            match unit {
                0 => tens.to_string(),
                // venti + uno -> ventuno, venti + otto -> ventotto
                1 | 8 => format!("{}{}", &tens[..tens.len() - 1], UNITS[usize::from(unit)]),
                3 => format!("{}tré", tens),
                _ => format!("{}{}", tens, UNITS[usize::from(unit)]),
            }
        }
    }
}
