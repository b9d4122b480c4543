//! Wire types for lookup requests and results.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Builds the card page URL for a name.
///
/// Success and error paths both go through here so the reported URL never
/// diverges from the one actually fetched.
pub fn card_url(base_url: &str, card_name: &str) -> String {
    format!("{}/card/{}", base_url.trim_end_matches('/'), urlencoding::encode(card_name))
}

/// Incoming lookup request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    /// English card name; a missing field reads as empty and is rejected by
    /// the handler.
    #[serde(default)]
    pub card_name: String,
}

/// A card price: a yen amount, or `"N/A"` on the wire when unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    Yen(u32),
    Unavailable,
}

impl Price {
    /// Returns the yen amount if available.
    pub fn yen(&self) -> Option<u32> {
        match self {
            Price::Yen(v) => Some(*v),
            Price::Unavailable => None,
        }
    }
}

impl From<Option<u32>> for Price {
    fn from(value: Option<u32>) -> Self {
        value.map(Price::Yen).unwrap_or(Price::Unavailable)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Price::Yen(v) => serializer.serialize_u32(*v),
            Price::Unavailable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Yen(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Yen(v) => Ok(Price::Yen(v)),
            Raw::Text(s) if s == "N/A" => Ok(Price::Unavailable),
            Raw::Text(other) => Err(D::Error::custom(format!("invalid price: {:?}", other))),
        }
    }
}

/// Outgoing lookup result.
///
/// Always a complete record: upstream failures degrade the price to `"N/A"`
/// and attach an error message instead of failing the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Localized card name, falling back to the requested name.
    pub japanese_name: String,
    /// Market price in yen, or `"N/A"`.
    pub price: Price,
    /// The upstream page URL this result was (or would have been) read from.
    pub url: String,
    /// Upstream failure description, when the lookup degraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupResult {
    /// Result for a page that was fetched and parsed.
    pub fn resolved(japanese_name: impl Into<String>, price: Price, url: impl Into<String>) -> Self {
        Self { japanese_name: japanese_name.into(), price, url: url.into(), error: None }
    }

    /// Degraded result for an upstream failure; the caller still gets the
    /// name it asked about and the URL that was attempted.
    pub fn unavailable(card_name: impl Into<String>, url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            japanese_name: card_name.into(),
            price: Price::Unavailable,
            url: url.into(),
            error: Some(error.into()),
        }
    }
}
