//! Fetch-and-parse orchestration for card lookups.

use crate::whisper::client::CardSource;
use crate::whisper::models::{LookupResult, Price};
use crate::whisper::parser::Parser;
use scraper::Html;
use tracing::{debug, info, warn};

/// Runs a single card lookup against an upstream source.
///
/// Upstream failures never escape this boundary: they degrade into a result
/// carrying the requested name, an `"N/A"` price, and an error message.
pub struct CardLookup {
    parser: Parser,
}

impl CardLookup {
    /// Creates a lookup with the default parser heuristics.
    pub fn new() -> Self {
        Self { parser: Parser::new() }
    }

    /// Creates a lookup with a custom parser.
    pub fn with_parser(parser: Parser) -> Self {
        Self { parser }
    }

    /// Fetches and parses the card page for a name.
    pub async fn execute(&self, client: &impl CardSource, card_name: &str) -> LookupResult {
        let url = client.card_url(card_name);
        info!("Looking up card: {}", card_name);

        let html = match client.card_page(card_name).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Upstream fetch failed for {}: {:#}", card_name, e);
                return LookupResult::unavailable(card_name, url, format!("{:#}", e));
            }
        };

        let (japanese_name, price) = self.parse_page(&html, card_name);
        debug!("Result for {}: name={}, price={:?}", card_name, japanese_name, price);

        LookupResult::resolved(japanese_name, price, url)
    }

    /// Extracts name and price, applying the fallback policy: a selector miss
    /// is not an error, just a degraded field.
    fn parse_page(&self, html: &str, card_name: &str) -> (String, Price) {
        let document = Html::parse_document(html);

        let price = self.parser.extract_price(&document);
        let name = self.parser.extract_japanese_name(&document);

        if price.is_none() || name.is_none() {
            self.parser.log_selector_misses(&document);
        }

        (name.unwrap_or_else(|| card_name.to_string()), Price::from(price))
    }
}

impl Default for CardLookup {
    fn default() -> Self {
        Self::new()
    }
}
