// SPDX-License-Identifier: MPL-2.0
//! Artwork records as served by the catalog.
//!
//! These are read-only, page-scoped copies: the data source owns the
//! records and the UI only keeps the page it is currently showing.

use std::fmt;

/// Identifier of an artwork in the data source.
///
/// Unique within the catalog but neither sequential nor contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkId(u64);

impl ArtworkId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ArtworkId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog record. Every field except `id` may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Creates a record with only an identifier set.
    #[must_use]
    pub fn bare(id: ArtworkId) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Returns the title, treating an empty string like a missing one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    #[must_use]
    pub fn place_of_origin(&self) -> Option<&str> {
        non_empty(self.place_of_origin.as_deref())
    }

    #[must_use]
    pub fn artist_display(&self) -> Option<&str> {
        non_empty(self.artist_display.as_deref())
    }

    #[must_use]
    pub fn inscriptions(&self) -> Option<&str> {
        non_empty(self.inscriptions.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// One fetched batch of artworks plus the size of the whole result set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtworkPage {
    pub artworks: Vec<Artwork>,
    pub total_records: u64,
}

impl ArtworkPage {
    /// Identifiers of the rows on this page, in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.artworks.iter().map(|a| a.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_read_as_missing() {
        let mut artwork = Artwork::bare(ArtworkId::new(4));
        artwork.title = Some("   ".into());
        artwork.artist_display = Some("Claude Monet".into());

        assert_eq!(artwork.title(), None);
        assert_eq!(artwork.artist_display(), Some("Claude Monet"));
        assert_eq!(artwork.place_of_origin(), None);
    }

    #[test]
    fn page_ids_keep_display_order() {
        let page = ArtworkPage {
            artworks: vec![
                Artwork::bare(ArtworkId::new(27992)),
                Artwork::bare(ArtworkId::new(4)),
                Artwork::bare(ArtworkId::new(129884)),
            ],
            total_records: 3,
        };

        assert_eq!(
            page.ids(),
            vec![
                ArtworkId::new(27992),
                ArtworkId::new(4),
                ArtworkId::new(129884)
            ]
        );
    }

    #[test]
    fn id_displays_raw_value() {
        assert_eq!(ArtworkId::from(129884).to_string(), "129884");
    }
}
