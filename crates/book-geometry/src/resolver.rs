//! Format resolution
//!
//! Turns a catalog selection or a custom trim size, plus page count and
//! binding, into a fully derived [`BookFormat`]. Every operation returns
//! a fresh value and leaves both the catalog and its inputs untouched.

use crate::catalog::FormatCatalog;
use crate::rules::gutter_width;
use crate::types::{BookFormat, Dimensions, Result, SpecInputs};

/// Where a format comes from
#[derive(Debug, Clone, PartialEq)]
pub enum FormatSource {
    /// A catalog entry by id
    Catalog(String),
    /// User-entered trim size
    Custom { trim: Dimensions, is_spread: bool },
}

/// Outcome of switching between single-page and spread layouts
#[derive(Debug, Clone, PartialEq)]
pub enum SpreadToggle {
    /// The counterpart format, fully resolved
    Switched(BookFormat),
    /// No counterpart exists; the prior format is handed back as-is
    Unchanged(BookFormat),
}

impl SpreadToggle {
    pub fn is_noop(&self) -> bool {
        matches!(self, SpreadToggle::Unchanged(_))
    }

    pub fn format(&self) -> &BookFormat {
        match self {
            SpreadToggle::Switched(format) | SpreadToggle::Unchanged(format) => format,
        }
    }

    pub fn into_format(self) -> BookFormat {
        match self {
            SpreadToggle::Switched(format) | SpreadToggle::Unchanged(format) => format,
        }
    }
}

/// Overwrite the page-count driven measurements of `format`.
///
/// Gutter follows the page count alone. Spine is set only for spreads and
/// only when a page count is known.
pub fn apply_specs(format: &BookFormat, inputs: &SpecInputs) -> BookFormat {
    let page_count = inputs.page_count.map(i64::from);

    BookFormat {
        gutter_width: page_count.map(gutter_width).unwrap_or(0.0),
        spine_width: if format.is_spread {
            page_count.map(|pages| inputs.binding.spine_width(pages))
        } else {
            None
        },
        page_count: inputs.page_count,
        ..format.clone()
    }
}

pub struct FormatResolver<'a> {
    catalog: &'a FormatCatalog,
}

impl<'a> FormatResolver<'a> {
    pub fn new(catalog: &'a FormatCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve a catalog entry. Unknown ids fail with `UnknownFormatId`.
    pub fn resolve(&self, id: &str, inputs: &SpecInputs) -> Result<BookFormat> {
        let base = self.catalog.get(id)?;
        let format = apply_specs(base, inputs);
        log::debug!(
            "Resolved format {} (pages: {:?}, binding: {:?}, gutter: {}, spine: {:?})",
            format.id,
            format.page_count,
            inputs.binding,
            format.gutter_width,
            format.spine_width
        );
        Ok(format)
    }

    /// Resolve a custom trim size.
    ///
    /// `trim` is expected to have passed [`Dimensions::validated_custom`];
    /// no range check happens here.
    pub fn resolve_custom(
        &self,
        trim: Dimensions,
        is_spread: bool,
        inputs: &SpecInputs,
    ) -> BookFormat {
        let format = apply_specs(&BookFormat::custom(trim, is_spread), inputs);
        log::debug!(
            "Resolved custom format {}x{} (spread: {}, pages: {:?})",
            trim.width,
            trim.height,
            is_spread,
            format.page_count
        );
        format
    }

    pub fn resolve_source(&self, source: &FormatSource, inputs: &SpecInputs) -> Result<BookFormat> {
        match source {
            FormatSource::Catalog(id) => self.resolve(id, inputs),
            FormatSource::Custom { trim, is_spread } => {
                Ok(self.resolve_custom(*trim, *is_spread, inputs))
            }
        }
    }

    /// Recompute an existing format for a new page count or binding
    pub fn rederive(&self, current: &BookFormat, inputs: &SpecInputs) -> BookFormat {
        apply_specs(current, inputs)
    }

    /// Switch between the single-page and spread variant of `current`.
    ///
    /// Custom formats flip their own flag. Catalog formats switch to their
    /// companion entry; without one the current format comes back unchanged.
    pub fn toggle_spread(&self, current: &BookFormat, inputs: &SpecInputs) -> SpreadToggle {
        if current.is_custom() {
            return SpreadToggle::Switched(self.resolve_custom(
                current.no_bleed,
                !current.is_spread,
                inputs,
            ));
        }

        match self.catalog.companion_of(&current.id) {
            Ok(companion) => SpreadToggle::Switched(apply_specs(companion, inputs)),
            Err(e) => {
                log::warn!("Spread toggle ignored: {}", e);
                SpreadToggle::Unchanged(current.clone())
            }
        }
    }
}
