use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::media::MediaType;

/// Poster value the catalog uses when it has no artwork for a title.
pub const NO_POSTER: &str = "N/A";

/// A search result as returned by the external catalog. Read-only to the
/// watchlist; items copy these fields on insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub imdb_id: String,
    pub title: String,
    /// Catalog-formatted, e.g. "1999" or "2011–2019" for series.
    pub year: String,
    #[serde(
        serialize_with = "serialize_poster",
        deserialize_with = "deserialize_poster",
        default
    )]
    pub poster: Option<String>,
    #[serde(default)]
    pub media_type: MediaType,
}

impl CatalogEntry {
    pub fn new(imdb_id: impl Into<String>, title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            imdb_id: imdb_id.into(),
            title: title.into(),
            year: year.into(),
            poster: None,
            media_type: MediaType::Movie,
        }
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = poster_from_wire(poster.into());
        self
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    pub fn has_poster(&self) -> bool {
        self.poster.is_some()
    }
}

/// Map the catalog's poster string to an optional URL, treating the sentinel
/// and blank values as "no poster".
pub fn poster_from_wire(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NO_POSTER {
        None
    } else {
        Some(raw)
    }
}

fn serialize_poster<S>(poster: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(poster.as_deref().unwrap_or(NO_POSTER))
}

fn deserialize_poster<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(poster_from_wire))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_poster_means_none() {
        let entry = CatalogEntry::new("tt0133093", "The Matrix", "1999").with_poster("N/A");
        assert!(!entry.has_poster());
    }

    #[test]
    fn test_poster_url_is_kept() {
        let entry = CatalogEntry::new("tt0133093", "The Matrix", "1999")
            .with_poster("https://example.com/matrix.jpg");
        assert_eq!(entry.poster.as_deref(), Some("https://example.com/matrix.jpg"));
    }

    #[test]
    fn test_missing_poster_serializes_as_sentinel() {
        let entry = CatalogEntry::new("tt0133093", "The Matrix", "1999");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["poster"], "N/A");
        assert_eq!(json["media_type"], "movie");

        let parsed: CatalogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.poster, None);
    }
}
