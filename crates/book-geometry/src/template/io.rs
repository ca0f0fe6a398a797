use super::Template;
use crate::types::{BookError, BookFormat, Result};
use std::collections::HashSet;
use std::path::Path;

impl Template {
    /// Export as the pretty-printed JSON document
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BookError::Export(e.to_string()))
    }

    /// Import a JSON document. The whole document is rejected on any
    /// structural problem; nothing is partially imported.
    pub fn from_json(json: &str) -> Result<Self> {
        let template: Template = serde_json::from_str(json)
            .map_err(|e| BookError::MalformedImportDocument(e.to_string()))?;
        validate_document(&template)?;
        Ok(template)
    }

    /// Load a template document from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let template = Self::from_json(&json)?;
        log::info!(
            "Loaded template {} ({} elements) from {}",
            template.id,
            template.elements.len(),
            path.display()
        );
        Ok(template)
    }

    /// Save the template document to disk
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tokio::fs::write(path, self.to_json()?).await?;
        log::info!("Saved template {} to {}", self.id, path.display());
        Ok(())
    }
}

fn malformed(message: impl Into<String>) -> BookError {
    BookError::MalformedImportDocument(message.into())
}

/// Structural checks serde cannot express
pub fn validate_document(template: &Template) -> Result<()> {
    validate_format(&template.format)?;

    let mut seen = HashSet::new();
    for element in &template.elements {
        if element.id.is_empty() {
            return Err(malformed("element with empty id"));
        }
        if !seen.insert(element.id.as_str()) {
            return Err(malformed(format!("duplicate element id: {}", element.id)));
        }
        let numbers = [
            element.x,
            element.y,
            element.width,
            element.height,
            element.rotation,
        ];
        if numbers.iter().any(|n| !n.is_finite()) {
            return Err(malformed(format!(
                "element {} has a non-finite coordinate",
                element.id
            )));
        }
        if element.width < 0.0 || element.height < 0.0 {
            return Err(malformed(format!(
                "element {} has a negative size",
                element.id
            )));
        }
    }

    Ok(())
}

fn validate_format(format: &BookFormat) -> Result<()> {
    if !format.no_bleed.is_positive() || !format.with_bleed.is_positive() {
        return Err(malformed(format!(
            "format {} has non-positive dimensions",
            format.id
        )));
    }
    if !format.gutter_width.is_finite() || format.gutter_width < 0.0 {
        return Err(malformed(format!(
            "format {} has an invalid gutter width",
            format.id
        )));
    }
    match format.spine_width {
        Some(_) if !format.is_spread => Err(malformed(format!(
            "format {} has a spine width but is not a spread",
            format.id
        ))),
        Some(spine) if !spine.is_finite() || spine < 0.0 => Err(malformed(format!(
            "format {} has an invalid spine width",
            format.id
        ))),
        _ => Ok(()),
    }
}
