//! Synthetic, network-free lookup results for development.

use crate::whisper::models::{card_url, LookupResult, Price};
use rand::RngExt;
use tracing::debug;

/// Demo price range in yen.
const DEMO_PRICE_MIN: u32 = 100;
const DEMO_PRICE_MAX: u32 = 1099;

/// Japanese names for the cards the front-end exercises in development.
const JAPANESE_NAMES: &[(&str, &str)] = &[
    ("Island", "島"),
    ("Mountain", "山"),
    ("Plains", "平地"),
    ("Forest", "森"),
    ("Swamp", "沼"),
    ("Lightning Bolt", "稲妻"),
    ("Counterspell", "反駁"),
    ("Sleight of Hand", "手練"),
    ("Shivan Reef", "シヴの浅瀬"),
];

/// Produces a synthetic result without touching the network.
///
/// Unmapped names pass through verbatim; the URL is the one a live lookup
/// would have fetched.
pub fn lookup(base_url: &str, card_name: &str) -> LookupResult {
    let japanese_name = JAPANESE_NAMES
        .iter()
        .find(|(english, _)| *english == card_name)
        .map(|(_, japanese)| (*japanese).to_string())
        .unwrap_or_else(|| card_name.to_string());

    let price = rand::rng().random_range(DEMO_PRICE_MIN..=DEMO_PRICE_MAX);
    debug!("Demo lookup for {}: {} yen", card_name, price);

    LookupResult::resolved(japanese_name, Price::Yen(price), card_url(base_url, card_name))
}
