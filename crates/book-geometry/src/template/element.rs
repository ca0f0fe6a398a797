use crate::constants::DUPLICATE_OFFSET_PX;
use crate::layout::Rect;
use serde::{Deserialize, Serialize};

/// What an element holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Image,
    Text,
    Placeholder,
}

impl ElementKind {
    /// Prefix used when generating element ids
    pub fn id_prefix(self) -> &'static str {
        match self {
            ElementKind::Image => "image",
            ElementKind::Text => "text",
            ElementKind::Placeholder => "placeholder",
        }
    }
}

/// An object placed on the page.
///
/// Position and size are device pixels relative to the canvas origin.
/// Elements never reference a format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateElement {
    /// Unique within a template; empty until the template assigns one
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees clockwise
    pub rotation: f64,
    pub is_placeholder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl TemplateElement {
    fn with_kind(kind: ElementKind, name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            id: String::new(),
            kind,
            name: name.into(),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            rotation: 0.0,
            is_placeholder: kind == ElementKind::Placeholder,
            content: None,
            src: None,
        }
    }

    pub fn image(name: impl Into<String>, src: impl Into<String>, bounds: Rect) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::with_kind(ElementKind::Image, name, bounds)
        }
    }

    /// A named empty slot to be filled later
    pub fn placeholder(name: impl Into<String>, bounds: Rect) -> Self {
        Self::with_kind(ElementKind::Placeholder, name, bounds)
    }

    pub fn text(name: impl Into<String>, content: impl Into<String>, bounds: Rect) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::with_kind(ElementKind::Text, name, bounds)
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Unrotated bounding box
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Axis-aligned box around the element after rotating it clockwise
    /// about its top-left corner (x, y)
    pub fn rotated_bounds(&self) -> Rect {
        if self.rotation == 0.0 {
            return self.bounds();
        }

        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let corners = [
            (0.0, 0.0),
            (self.width, 0.0),
            (0.0, self.height),
            (self.width, self.height),
        ]
        .map(|(dx, dy)| (dx * cos - dy * sin, dx * sin + dy * cos));

        let min_x = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
        let max_y = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);

        Rect::new(self.x + min_x, self.y + min_y, max_x - min_x, max_y - min_y)
    }

    pub fn moved_to(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    pub fn resized(self, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Set rotation, normalised into [0, 360)
    pub fn rotated(self, degrees: f64) -> Self {
        Self {
            rotation: degrees.rem_euclid(360.0),
            ..self
        }
    }

    /// Copy offset down and right, ready for a new id
    pub fn duplicated(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: format!("{} copy", self.name),
            x: self.x + DUPLICATE_OFFSET_PX,
            y: self.y + DUPLICATE_OFFSET_PX,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_flag_follows_kind() {
        let slot = TemplateElement::placeholder("Hero", Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(slot.is_placeholder);
        assert!(slot.src.is_none());

        let image = TemplateElement::image("Photo", "photo.png", Rect::default());
        assert!(!image.is_placeholder);
        assert_eq!(image.src.as_deref(), Some("photo.png"));
    }

    #[test]
    fn test_rotation_normalised() {
        let element = TemplateElement::placeholder("a", Rect::default());
        assert_eq!(element.clone().rotated(370.0).rotation, 10.0);
        assert_eq!(element.rotated(-90.0).rotation, 270.0);
    }

    #[test]
    fn test_rotated_bounds_quarter_turn() {
        let element =
            TemplateElement::placeholder("Strip", Rect::new(100.0, 100.0, 400.0, 10.0)).rotated(90.0);
        let bounds = element.rotated_bounds();

        assert!((bounds.x - 90.0).abs() < 1e-9);
        assert!((bounds.y - 100.0).abs() < 1e-9);
        assert!((bounds.width - 10.0).abs() < 1e-9);
        assert!((bounds.height - 400.0).abs() < 1e-9);
        assert!((bounds.center_y() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotated_bounds_unrotated() {
        let element = TemplateElement::placeholder("a", Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(element.rotated_bounds(), element.bounds());
    }

    #[test]
    fn test_duplicate_offsets() {
        let element = TemplateElement::text("Title", "Hello", Rect::new(5.0, 5.0, 100.0, 20.0))
            .with_id("text-1");
        let copy = element.duplicated("text-2");
        assert_eq!(copy.id, "text-2");
        assert_eq!(copy.name, "Title copy");
        assert_eq!((copy.x, copy.y), (25.0, 25.0));
        assert_eq!(copy.content, element.content);
    }
}
