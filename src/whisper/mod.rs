//! Wisdom Guild scraping: client, parser, and wire models.

pub mod client;
pub mod lookup;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{CardSource, WhisperClient};
pub use lookup::CardLookup;
pub use models::{card_url, LookupRequest, LookupResult, Price};
pub use parser::{Parser, PriceHeuristics};

/// Production host serving card pages.
pub const DEFAULT_BASE_URL: &str = "https://whisper.wisdom-guild.net";
