// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the artwork catalog API.
//!
//! Only one endpoint is consumed:
//!
//! ```text
//! GET {base_url}/artworks?page={n}&limit={rows}&fields=...
//! ```
//!
//! The response carries the page in `data` and the size of the whole result
//! set in `pagination.total`. Any non-2xx status is a fetch error.

use crate::domain::{Artwork, ArtworkId, ArtworkPage, PageNumber, RowsPerPage};
use crate::error::FetchError;
use reqwest::Url;
use serde::Deserialize;

/// Columns requested from the API; matches what the table renders.
pub const ARTWORK_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

const USER_AGENT: &str = concat!("ArtworkPicker/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: Vec<ApiArtwork>,
    pagination: ApiPagination,
}

#[derive(Debug, Deserialize)]
struct ApiPagination {
    total: u64,
}

#[derive(Debug, Deserialize)]
struct ApiArtwork {
    id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    place_of_origin: Option<String>,
    #[serde(default)]
    artist_display: Option<String>,
    #[serde(default)]
    inscriptions: Option<String>,
    #[serde(default)]
    date_start: Option<i32>,
    #[serde(default)]
    date_end: Option<i32>,
}

impl From<ApiArtwork> for Artwork {
    fn from(raw: ApiArtwork) -> Self {
        Artwork {
            id: ArtworkId::new(raw.id),
            title: raw.title,
            place_of_origin: raw.place_of_origin,
            artist_display: raw.artist_display,
            inscriptions: raw.inscriptions,
            date_start: raw.date_start,
            date_end: raw.date_end,
        }
    }
}

/// Decodes an `/artworks` response body.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] when the body is not the expected JSON shape.
pub fn parse_page_response(body: &[u8]) -> Result<ArtworkPage, FetchError> {
    let response: ApiResponse = serde_json::from_slice(body)?;
    Ok(ArtworkPage {
        artworks: response.data.into_iter().map(Artwork::from).collect(),
        total_records: response.pagination.total,
    })
}

/// Client for the catalog API. Cheap to clone into async tasks.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Builds a client for the API rooted at `base_url`
    /// (e.g. `https://api.artic.edu/api/v1`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the HTTP client cannot
    /// be initialized.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base_url = parse_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the `/artworks` request for one page.
    #[must_use]
    pub fn page_url(&self, page: PageNumber, rows_per_page: RowsPerPage) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("artworks");
        }
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &rows_per_page.to_string())
            .append_pair("fields", ARTWORK_FIELDS);
        url
    }

    /// Fetches one page of artworks together with the total record count.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the request cannot be completed,
    /// [`FetchError::Status`] on a non-success status and
    /// [`FetchError::Decode`] on a malformed body. No retry is attempted.
    pub async fn fetch_page(
        &self,
        page: PageNumber,
        rows_per_page: RowsPerPage,
    ) -> Result<ArtworkPage, FetchError> {
        let url = self.page_url(page, rows_per_page);
        tracing::debug!(%url, "requesting artworks page");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_page_response(&body)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "pagination": {"total": 129884, "limit": 12, "offset": 0, "total_pages": 10824, "current_page": 1},
        "data": [
            {
                "id": 27992,
                "title": "A Sunday on La Grande Jatte — 1884",
                "place_of_origin": "France",
                "artist_display": "Georges Seurat\nFrench, 1859-1891",
                "inscriptions": null,
                "date_start": 1884,
                "date_end": 1886
            },
            {"id": 4, "title": null}
        ],
        "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
    }"#;

    #[test]
    fn parses_page_and_total() {
        let page = parse_page_response(SAMPLE.as_bytes()).expect("valid sample");

        assert_eq!(page.total_records, 129_884);
        assert_eq!(page.artworks.len(), 2);

        let first = &page.artworks[0];
        assert_eq!(first.id, ArtworkId::new(27992));
        assert_eq!(first.place_of_origin.as_deref(), Some("France"));
        assert_eq!(first.inscriptions, None);
        assert_eq!(first.date_start, Some(1884));

        let second = &page.artworks[1];
        assert_eq!(second.id, ArtworkId::new(4));
        assert_eq!(second.title, None);
        assert_eq!(second.date_end, None);
    }

    #[test]
    fn missing_pagination_is_a_decode_error() {
        let err = parse_page_response(br#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn record_without_id_is_rejected() {
        let body = br#"{"data": [{"title": "x"}], "pagination": {"total": 1}}"#;
        assert!(matches!(parse_page_response(body), Err(FetchError::Decode(_))));
    }

    #[test]
    fn page_url_carries_page_limit_and_fields() {
        let client = CatalogClient::new("https://api.artic.edu/api/v1").expect("client");
        let page = PageNumber::new(3).expect("non-zero page");
        let url = client.page_url(page, RowsPerPage::TwentyFour);

        assert_eq!(url.path(), "/api/v1/artworks");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "3".to_string()),
                ("limit".to_string(), "24".to_string()),
                ("fields".to_string(), ARTWORK_FIELDS.to_string()),
            ]
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = CatalogClient::new("https://api.artic.edu/api/v1/").expect("client");
        let url = client.page_url(PageNumber::FIRST, RowsPerPage::Twelve);
        assert_eq!(url.path(), "/api/v1/artworks");
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        assert!(matches!(
            CatalogClient::new("ftp://example.org/api"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            CatalogClient::new("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
