//! Heuristic extraction of price and localized name from card pages.

use crate::whisper::selectors;
use scraper::Html;
use tracing::{debug, trace};

/// Bounds for accepting a bold text node as a price.
///
/// These were tuned against the site's current markup; there is no documented
/// contract behind them. Change the defaults only with a fresh page sample in
/// hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceHeuristics {
    /// Longest candidate text (in chars) still considered a price.
    pub max_text_len: usize,
    /// Smallest accepted yen value.
    pub min_yen: u32,
    /// Largest accepted yen value.
    pub max_yen: u32,
}

impl PriceHeuristics {
    pub const DEFAULT_MAX_TEXT_LEN: usize = 10;
    pub const DEFAULT_MIN_YEN: u32 = 1;
    pub const DEFAULT_MAX_YEN: u32 = 1_000_000;
}

impl Default for PriceHeuristics {
    fn default() -> Self {
        Self {
            max_text_len: Self::DEFAULT_MAX_TEXT_LEN,
            min_yen: Self::DEFAULT_MIN_YEN,
            max_yen: Self::DEFAULT_MAX_YEN,
        }
    }
}

/// Parser for Wisdom Guild card pages.
///
/// Pure over a parsed document; no transport concerns. Both extractors
/// return `None` on a selector miss and leave fallback policy to the caller.
pub struct Parser {
    heuristics: PriceHeuristics,
}

impl Parser {
    /// Creates a parser with the default heuristics.
    pub fn new() -> Self {
        Self { heuristics: PriceHeuristics::default() }
    }

    /// Creates a parser with custom price bounds.
    pub fn with_heuristics(heuristics: PriceHeuristics) -> Self {
        Self { heuristics }
    }

    /// Extracts the market price from the price summary container.
    ///
    /// Scans `<b>` descendants in document order; the first digits-and-commas
    /// text within bounds wins.
    pub fn extract_price(&self, document: &Html) -> Option<u32> {
        let summary = document.select(&selectors::PRICE_SUMMARY).next()?;

        for bold in summary.select(&selectors::PRICE_CANDIDATE) {
            let text = bold.text().collect::<String>();
            let text = text.trim();

            match self.parse_price_text(text) {
                Some(yen) => {
                    debug!("Accepted price candidate: {:?} -> {}", text, yen);
                    return Some(yen);
                }
                None => trace!("Rejected price candidate: {:?}", text),
            }
        }

        None
    }

    /// Extracts the Japanese name from the card title heading.
    ///
    /// Titles read `日本語名/English Name`; the text before the first slash is
    /// the localized name.
    pub fn extract_japanese_name(&self, document: &Html) -> Option<String> {
        let heading = document.select(&selectors::CARD_TITLE).next()?;
        let title = heading.text().collect::<String>();

        let name = title.trim().split('/').next().unwrap_or_default().trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    /// Validates a candidate text against the price heuristics.
    fn parse_price_text(&self, text: &str) -> Option<u32> {
        if text.is_empty() || text.chars().count() > self.heuristics.max_text_len {
            return None;
        }

        if !text.chars().all(|c| c.is_ascii_digit() || c == ',') {
            return None;
        }

        let yen: u32 = text.replace(',', "").parse().ok()?;
        (self.heuristics.min_yen..=self.heuristics.max_yen).contains(&yen).then_some(yen)
    }

    /// Logs a bounded sample of price-like and title-like elements.
    ///
    /// Called when the primary selectors miss; upstream markup drift shows up
    /// here first.
    pub fn log_selector_misses(&self, document: &Html) {
        let price_like: Vec<String> = document
            .select(&selectors::FALLBACK_PRICE)
            .map(|e| e.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty() && t.chars().count() < 20 && t.contains(|c: char| c.is_ascii_digit()))
            .take(5)
            .collect();

        let title_like: Vec<String> = document
            .select(&selectors::FALLBACK_TITLE)
            .map(|e| e.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty() && t.chars().count() < 100)
            .take(3)
            .collect();

        debug!("Selector miss; price-like elements: {:?}, title-like elements: {:?}", price_like, title_like);
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    // Price candidate validation

    #[test]
    fn test_parse_price_text() {
        let parser = Parser::new();
        assert_eq!(parser.parse_price_text("1,234"), Some(1234));
        assert_eq!(parser.parse_price_text("80"), Some(80));
        assert_eq!(parser.parse_price_text("1,000,000"), Some(1_000_000));
    }

    #[test]
    fn test_parse_price_text_rejects_non_numeric() {
        let parser = Parser::new();
        assert_eq!(parser.parse_price_text(""), None);
        assert_eq!(parser.parse_price_text("¥1,234"), None);
        assert_eq!(parser.parse_price_text("1234円"), None);
        assert_eq!(parser.parse_price_text("2025/08/01"), None);
        assert_eq!(parser.parse_price_text("稲妻"), None);
        // Commas only, nothing to parse
        assert_eq!(parser.parse_price_text(",,,"), None);
    }

    #[test]
    fn test_parse_price_text_bounds() {
        let parser = Parser::new();
        // Range is inclusive on both ends
        assert_eq!(parser.parse_price_text("1"), Some(1));
        assert_eq!(parser.parse_price_text("1000000"), Some(1_000_000));
        assert_eq!(parser.parse_price_text("0"), None);
        assert_eq!(parser.parse_price_text("1000001"), None);
        // 11 chars, over the length cap even though numerically fine
        assert_eq!(parser.parse_price_text("00000001234"), None);
        // Exactly 10 chars passes the length check but not the range
        assert_eq!(parser.parse_price_text("99,999,999"), None);
    }

    #[test]
    fn test_custom_heuristics() {
        let parser = Parser::with_heuristics(PriceHeuristics {
            max_text_len: 12,
            min_yen: 1,
            max_yen: 100_000_000,
        });
        assert_eq!(parser.parse_price_text("99,999,999"), Some(99_999_999));
    }

    // Price extraction

    #[test]
    fn test_extract_price_first_match_wins() {
        let parser = Parser::new();
        let document = parse(
            r#"<div class="wg-wonder-price-summary">
                <b>稲妻/Lightning Bolt</b>
                <b>1,234</b>
                <b>1,480</b>
            </div>"#,
        );
        assert_eq!(parser.extract_price(&document), Some(1234));
    }

    #[test]
    fn test_extract_price_skips_invalid_candidates() {
        let parser = Parser::new();
        let document = parse(
            r#"<div class="wg-wonder-price-summary">
                <b>最安値</b>
                <b>99999999</b>
                <b>350</b>
            </div>"#,
        );
        assert_eq!(parser.extract_price(&document), Some(350));
    }

    #[test]
    fn test_extract_price_no_summary_container() {
        let parser = Parser::new();
        let document = parse("<html><body><b>1,234</b></body></html>");
        assert_eq!(parser.extract_price(&document), None);
    }

    #[test]
    fn test_extract_price_no_valid_candidate() {
        let parser = Parser::new();
        let document = parse(
            r#"<div class="wg-wonder-price-summary"><b>価格情報なし</b></div>"#,
        );
        assert_eq!(parser.extract_price(&document), None);
    }

    #[test]
    fn test_extract_price_ignores_bold_outside_summary() {
        let parser = Parser::new();
        let document = parse(
            r#"<b>500</b><div class="wg-wonder-price-summary"><b>720</b></div>"#,
        );
        assert_eq!(parser.extract_price(&document), Some(720));
    }

    // Name extraction

    #[test]
    fn test_extract_japanese_name() {
        let parser = Parser::new();
        let document = parse(
            r#"<div class="wg-whisper-card-title"><h1>島/Island</h1></div>"#,
        );
        assert_eq!(parser.extract_japanese_name(&document), Some("島".to_string()));
    }

    #[test]
    fn test_extract_japanese_name_trims_whitespace() {
        let parser = Parser::new();
        let document = parse(
            r#"<div class="wg-whisper-card-title"><h1>  シヴの浅瀬 / Shivan Reef  </h1></div>"#,
        );
        assert_eq!(parser.extract_japanese_name(&document), Some("シヴの浅瀬".to_string()));
    }

    #[test]
    fn test_extract_japanese_name_without_separator() {
        let parser = Parser::new();
        let document = parse(
            r#"<div class="wg-whisper-card-title"><h1>Black Lotus</h1></div>"#,
        );
        assert_eq!(parser.extract_japanese_name(&document), Some("Black Lotus".to_string()));
    }

    #[test]
    fn test_extract_japanese_name_missing_heading() {
        let parser = Parser::new();
        assert_eq!(
            parser.extract_japanese_name(&parse("<html><body></body></html>")),
            None
        );
        assert_eq!(
            parser.extract_japanese_name(&parse(
                r#"<div class="wg-whisper-card-title"><h1></h1></div>"#
            )),
            None
        );
    }

    #[test]
    fn test_log_selector_misses_does_not_panic() {
        let parser = Parser::new();
        let document = parse("<html><body><b>42</b><h1>Some Title</h1></body></html>");
        parser.log_selector_misses(&document);
    }
}
