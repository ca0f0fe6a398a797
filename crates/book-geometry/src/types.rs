use crate::constants::{
    BLEED_ALLOWANCE_IN, CUSTOM_FORMAT_ID, CUSTOM_FORMAT_NAME, MAX_CUSTOM_IN, MIN_CUSTOM_IN,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Unknown format id: {0}")]
    UnknownFormatId(String),
    #[error("No companion format for: {0}")]
    MissingCompanionFormat(String),
    #[error("Invalid {field}: {value} (expected {min} to {max} inches)")]
    InvalidDimension {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Malformed template document: {0}")]
    MalformedImportDocument(String),
    #[error("Failed to export template: {0}")]
    Export(String),
    #[error("No element with id: {0}")]
    ElementNotFound(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BookError>;

/// Physical size in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size after adding the bleed allowance to both edges of each axis
    pub fn with_bleed(self) -> Self {
        Self {
            width: self.width + BLEED_ALLOWANCE_IN,
            height: self.height + BLEED_ALLOWANCE_IN,
        }
    }

    /// Size after removing `inches` from every edge
    pub fn inset(self, inches: f64) -> Self {
        Self {
            width: self.width - inches * 2.0,
            height: self.height - inches * 2.0,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Validate user-entered custom trim dimensions.
    ///
    /// This is the input boundary check. The resolver trusts whatever
    /// it is handed, so callers collecting sizes from a user run this first.
    pub fn validated_custom(width: f64, height: f64) -> Result<Self> {
        check_custom_axis("width", width)?;
        check_custom_axis("height", height)?;
        Ok(Self { width, height })
    }
}

fn check_custom_axis(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || !(MIN_CUSTOM_IN..=MAX_CUSTOM_IN).contains(&value) {
        return Err(BookError::InvalidDimension {
            field,
            value,
            min: MIN_CUSTOM_IN,
            max: MAX_CUSTOM_IN,
        });
    }
    Ok(())
}

/// Binding methods that determine spine width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Binding {
    /// Glued softcover
    #[default]
    Paperback,
    /// Case-bound hardcover
    Hardcover,
}

impl Binding {
    pub fn name(self) -> &'static str {
        match self {
            Binding::Paperback => "Paperback",
            Binding::Hardcover => "Hardcover",
        }
    }
}

/// Inputs that drive the derived measurements of a format
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpecInputs {
    /// Interior page count (None = no gutter, no spine)
    pub page_count: Option<u32>,
    pub binding: Binding,
}

impl SpecInputs {
    pub fn new(page_count: Option<u32>, binding: Binding) -> Self {
        Self {
            page_count,
            binding,
        }
    }
}

/// A trim size together with its derived printing geometry.
///
/// Values are immutable snapshots: every change goes through the
/// resolver and produces a new `BookFormat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFormat {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) no_bleed: Dimensions,
    pub(crate) with_bleed: Dimensions,
    pub(crate) is_spread: bool,
    pub(crate) gutter_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) spine_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) page_count: Option<u32>,
}

impl BookFormat {
    /// Author a catalog entry.
    ///
    /// Spreads start from the baseline 0.125in gutter and a zero spine
    /// placeholder; single pages carry neither until resolved.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        no_bleed: Dimensions,
        with_bleed: Dimensions,
        is_spread: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            no_bleed,
            with_bleed,
            is_spread,
            gutter_width: if is_spread { 0.125 } else { 0.0 },
            spine_width: if is_spread { Some(0.0) } else { None },
            page_count: None,
        }
    }

    /// Build an unresolved custom format; the bled size is always additive.
    pub fn custom(trim: Dimensions, is_spread: bool) -> Self {
        Self::new(
            CUSTOM_FORMAT_ID,
            CUSTOM_FORMAT_NAME,
            trim,
            trim.with_bleed(),
            is_spread,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Final cut size
    pub fn no_bleed(&self) -> Dimensions {
        self.no_bleed
    }

    /// Full page size including bleed on every edge
    pub fn with_bleed(&self) -> Dimensions {
        self.with_bleed
    }

    pub fn is_spread(&self) -> bool {
        self.is_spread
    }

    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_FORMAT_ID
    }

    pub fn gutter_width(&self) -> f64 {
        self.gutter_width
    }

    /// Only ever present on spreads
    pub fn spine_width(&self) -> Option<f64> {
        self.spine_width
    }

    pub fn page_count(&self) -> Option<u32> {
        self.page_count
    }
}
