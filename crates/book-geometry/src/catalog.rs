//! Named trim sizes
//!
//! The catalog is a read-only table handed to the resolver, so tests can
//! substitute their own entries.

use crate::types::{BookError, BookFormat, Dimensions, Result};

/// A catalog format plus the id of its single-page/spread counterpart
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub format: BookFormat,
    pub companion: Option<String>,
}

impl CatalogEntry {
    pub fn new(format: BookFormat) -> Self {
        Self {
            format,
            companion: None,
        }
    }

    pub fn with_companion(mut self, id: impl Into<String>) -> Self {
        self.companion = Some(id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormatCatalog {
    entries: Vec<CatalogEntry>,
}

impl Default for FormatCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormatCatalog {
    /// Build a catalog from arbitrary entries, preserving their order
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The standard trade trim sizes
    pub fn standard() -> Self {
        let page = |id: &str, name: &str, w: f64, h: f64, bw: f64, bh: f64| {
            BookFormat::new(
                id,
                name,
                Dimensions::new(w, h),
                Dimensions::new(bw, bh),
                false,
            )
        };
        let spread = |id: &str, name: &str, w: f64, h: f64, bw: f64, bh: f64| {
            BookFormat::new(
                id,
                name,
                Dimensions::new(w, h),
                Dimensions::new(bw, bh),
                true,
            )
        };

        Self::from_entries([
            CatalogEntry::new(page("pocketbook", "Pocketbook", 4.25, 6.87, 4.5, 7.12))
                .with_companion("pocketbookSpread"),
            CatalogEntry::new(page("digest", "Digest", 5.5, 8.5, 5.75, 8.75))
                .with_companion("digestSpread"),
            CatalogEntry::new(page("a5", "A5", 5.83, 8.27, 6.08, 8.52)),
            CatalogEntry::new(page("royal", "Royal", 6.14, 9.21, 6.39, 9.46)),
            CatalogEntry::new(page("usTrade", "US Trade", 6.0, 9.0, 6.25, 9.25)),
            CatalogEntry::new(page("comicBook", "Comic Book", 6.625, 10.25, 6.875, 10.5)),
            CatalogEntry::new(spread(
                "pocketbookSpread",
                "Pocketbook Spread",
                8.5,
                6.87,
                8.75,
                7.12,
            ))
            .with_companion("pocketbook"),
            CatalogEntry::new(spread(
                "digestSpread",
                "Digest Spread",
                11.0,
                8.5,
                11.25,
                8.75,
            ))
            .with_companion("digest"),
        ])
    }

    fn entry(&self, id: &str) -> Result<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.format.id() == id)
            .ok_or_else(|| BookError::UnknownFormatId(id.to_string()))
    }

    /// Exact-match lookup by format id
    pub fn get(&self, id: &str) -> Result<&BookFormat> {
        self.entry(id).map(|entry| &entry.format)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entry(id).is_ok()
    }

    /// Look up the spread (or single-page) counterpart of `id`.
    ///
    /// Fails with `UnknownFormatId` when `id` itself is absent, and with
    /// `MissingCompanionFormat` when it has no counterpart in this catalog.
    pub fn companion_of(&self, id: &str) -> Result<&BookFormat> {
        let entry = self.entry(id)?;
        entry
            .companion
            .as_deref()
            .and_then(|companion| self.get(companion).ok())
            .ok_or_else(|| BookError::MissingCompanionFormat(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
