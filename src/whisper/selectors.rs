//! CSS selectors for Wisdom Guild card pages.
//!
//! Everything the parser assumes about the upstream markup lives here.
//! The page has no formal schema; when parsing starts failing, capture an
//! HTML sample and update these.

use scraper::Selector;
use std::sync::LazyLock;

/// Container holding the market price summary.
pub static PRICE_SUMMARY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.wg-wonder-price-summary").unwrap());

/// Bold text inside the price summary; scanned in document order for the
/// first price-shaped value.
pub static PRICE_CANDIDATE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("b").unwrap());

/// Card title heading of the form `日本語名/English Name`.
pub static CARD_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.wg-whisper-card-title h1").unwrap());

/// Loose net for price-like elements, used only for miss diagnostics.
pub static FALLBACK_PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[class*='price'] b, [class*='wonder'] b, b, strong").unwrap());

/// Loose net for title-like elements, used only for miss diagnostics.
pub static FALLBACK_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, [class*='title']").unwrap());
