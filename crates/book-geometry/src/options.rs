use crate::catalog::FormatCatalog;
use crate::constants::{DEFAULT_FORMAT_ID, DEFAULT_PIXELS_PER_INCH, DEFAULT_TEMPLATE_NAME};
use crate::layout::{DeviceScale, GuideOptions};
use crate::resolver::{FormatResolver, FormatSource};
use crate::template::Template;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Editor session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorSettings {
    // Format selection
    pub format_id: String,
    /// Overrides `format_id` when set
    pub custom_size: Option<Dimensions>,
    /// Requested layout; None keeps whatever the selected entry is
    pub is_spread: Option<bool>,

    // Derived measurement inputs
    pub page_count: Option<u32>,
    pub binding: Binding,

    // Guides
    pub pixels_per_inch: f64,
    pub show_gutter: bool,
    pub show_spine: bool,

    pub template_name: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            format_id: DEFAULT_FORMAT_ID.to_string(),
            custom_size: None,
            is_spread: None,
            page_count: None,
            binding: Binding::Paperback,
            pixels_per_inch: DEFAULT_PIXELS_PER_INCH,
            show_gutter: true,
            show_spine: true,
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }
}

impl EditorSettings {
    /// Load settings from JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        let settings = serde_json::from_slice(&bytes)
            .map_err(|e| BookError::Config(format!("Failed to parse settings: {}", e)))?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Save settings to JSON file
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookError::Config(format!("Failed to serialize settings: {}", e)))?;
        tokio::fs::write(path.as_ref(), json).await?;
        log::info!("Saved settings to {}", path.as_ref().display());
        Ok(())
    }

    /// Validate user input before it reaches the resolver
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = self.custom_size {
            Dimensions::validated_custom(size.width, size.height)?;
        } else if self.format_id.is_empty() {
            return Err(BookError::Config("No format selected".to_string()));
        }

        if !self.pixels_per_inch.is_finite() || self.pixels_per_inch <= 0.0 {
            return Err(BookError::Config(format!(
                "Pixels per inch must be positive, got {}",
                self.pixels_per_inch
            )));
        }

        Ok(())
    }

    pub fn spec_inputs(&self) -> SpecInputs {
        SpecInputs::new(self.page_count, self.binding)
    }

    pub fn format_source(&self) -> FormatSource {
        match self.custom_size {
            Some(trim) => FormatSource::Custom {
                trim,
                is_spread: self.is_spread.unwrap_or(false),
            },
            None => FormatSource::Catalog(self.format_id.clone()),
        }
    }

    pub fn scale(&self) -> DeviceScale {
        DeviceScale(self.pixels_per_inch)
    }

    pub fn guide_options(&self) -> GuideOptions {
        GuideOptions {
            show_gutter: self.show_gutter,
            show_spine: self.show_spine,
        }
    }

    /// Resolve the configured format.
    ///
    /// A catalog selection whose spread flag disagrees with an explicit
    /// `is_spread` request is switched to its companion when the catalog
    /// has one.
    pub fn resolve(&self, catalog: &FormatCatalog) -> Result<BookFormat> {
        self.validate()?;

        let resolver = FormatResolver::new(catalog);
        let inputs = self.spec_inputs();
        let format = resolver.resolve_source(&self.format_source(), &inputs)?;

        if self
            .is_spread
            .is_none_or(|wanted| wanted == format.is_spread())
        {
            return Ok(format);
        }

        Ok(resolver.toggle_spread(&format, &inputs).into_format())
    }

    /// Start a blank template for the configured format
    pub fn new_template(&self, catalog: &FormatCatalog) -> Result<Template> {
        let format = self.resolve(catalog)?;
        Ok(Template::new(format).with_name(self.template_name.clone()))
    }
}
