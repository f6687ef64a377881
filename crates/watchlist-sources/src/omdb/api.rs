use serde::Deserialize;
use watchlist_models::{CatalogEntry, MediaType};
use crate::error::CatalogError;
use crate::traits::CatalogSearch;

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<OmdbSearchItem>,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "Type", default)]
    media_type: Option<String>,
}

impl From<OmdbSearchItem> for CatalogEntry {
    fn from(item: OmdbSearchItem) -> Self {
        CatalogEntry::new(item.imdb_id, item.title, item.year)
            .with_poster(item.poster)
            .with_media_type(item.media_type.map(MediaType::from).unwrap_or_default())
    }
}

/// Build the search URL. The query is URL-encoded; the key is passed as-is.
pub fn search_url(base_url: &str, query: &str, api_key: &str) -> String {
    format!(
        "{}/?s={}&apikey={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query),
        urlencoding::encode(api_key)
    )
}

/// Interpret an OMDb search body. `Response` is a string flag, "True" on success.
pub fn parse_search_response(body: &str) -> Result<CatalogSearch, CatalogError> {
    let response: OmdbSearchResponse = serde_json::from_str(body)
        .map_err(|e| CatalogError::ParseError(format!("Failed to parse search response: {}", e)))?;

    if !response.response.eq_ignore_ascii_case("true") {
        let message = response.error.filter(|m| !m.trim().is_empty());
        return Ok(CatalogSearch::Miss { message });
    }

    tracing::trace!(
        total_results = response.total_results.as_deref().unwrap_or("?"),
        page_size = response.search.len(),
        "OMDb search page parsed"
    );

    Ok(CatalogSearch::Hits(
        response.search.into_iter().map(CatalogEntry::from).collect(),
    ))
}
