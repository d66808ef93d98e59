// web_app/model/mod.rs - Shared data models for client and server
//
// The Book struct mirrors the JSON records returned by the remote catalog.
// SearchType and SortMode back the radio group and the sort selector on the
// search page.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Which field(s) a search term is matched against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchType {
    #[default]
    Combined,   // Title and author at once
    Title,
    Author,
    User,       // Selectable, no dedicated catalog path
}

impl SearchType {
    pub const ALL: [SearchType; 4] = [
        SearchType::Combined,
        SearchType::Title,
        SearchType::Author,
        SearchType::User,
    ];

    /// Form value used by the radio inputs
    pub fn value(self) -> &'static str {
        match self {
            SearchType::Combined => "todo",
            SearchType::Title => "title",
            SearchType::Author => "author",
            SearchType::User => "user",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchType::Combined => "Todo",
            SearchType::Title => "Título",
            SearchType::Author => "Autor",
            SearchType::User => "Usuario",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sort selector value. Purely presentational: results keep catalog order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    Unset,
    Ranking,
    Default,
}

impl SortMode {
    pub fn value(self) -> &'static str {
        match self {
            SortMode::Unset => "",
            SortMode::Ranking => "rankings",
            SortMode::Default => "Default",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "rankings" => SortMode::Ranking,
            "Default" => SortMode::Default,
            _ => SortMode::Unset,
        }
    }
}

/// Book record from the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(rename = "averagerating")]
    pub average_rating: f64,
    #[serde(rename = "numberreviews")]
    pub number_of_reviews: u32,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub publication_date: Option<NaiveDate>,
    #[serde(rename = "coverimage", default)]
    pub cover_image_url: String,
}

/// Accepts `YYYY-MM-DD`, RFC 3339 and naive timestamps. Anything else
/// becomes `None` instead of rejecting the whole record.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_publication_date))
}

pub fn parse_publication_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Instants are shown on the reader's calendar, not UTC's
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(&Local).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|stamp| stamp.date())
}
