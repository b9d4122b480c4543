//! whisper-price - Card price lookup service
//!
//! Scrapes Wisdom Guild (whisper.wisdom-guild.net) for a card's Japanese
//! name and market price, behind a small CORS-friendly HTTP endpoint with a
//! network-free demo mode for front-end development.

pub mod config;
pub mod demo;
pub mod server;
pub mod whisper;

pub use config::Config;
pub use whisper::models::{LookupRequest, LookupResult, Price};
