//! Layout data types for guide geometry
//!
//! All rectangles use the canvas convention: origin at the top-left
//! corner of the bled page, y growing downward, device units.

use crate::constants::DEFAULT_PIXELS_PER_INCH;

/// Physical-to-device scale in device units per inch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceScale(pub f64);

impl Default for DeviceScale {
    fn default() -> Self {
        Self(DEFAULT_PIXELS_PER_INCH)
    }
}

impl DeviceScale {
    pub fn per_inch(self) -> f64 {
        self.0
    }

    /// Convert inches to device units
    pub fn to_device(self, inches: f64) -> f64 {
        inches * self.0
    }

    /// Convert device units back to inches
    pub fn to_inches(self, units: f64) -> f64 {
        units / self.0
    }
}

/// A rectangular area in device units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f64) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }

    /// Full-height vertical band of `width` centered on this rect
    pub fn vertical_band(&self, width: f64) -> Self {
        Self::new(self.center_x() - width / 2.0, self.y, width, self.height)
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Which optional overlays to produce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideOptions {
    pub show_gutter: bool,
    pub show_spine: bool,
}

impl Default for GuideOptions {
    fn default() -> Self {
        Self {
            show_gutter: true,
            show_spine: true,
        }
    }
}

/// Guide regions for one page or spread
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLayout {
    /// Full bled page
    pub page: Rect,
    /// Final cut boundary
    pub trim: Rect,
    /// Area where content is safe from trimming
    pub safety: Rect,
    /// Gutter band (spreads only; may be zero width)
    pub gutter: Option<Rect>,
    /// Spine band (spreads with a non-zero spine only)
    pub spine: Option<Rect>,
}

impl GuideLayout {
    pub fn is_within_safety(&self, bounds: &Rect) -> bool {
        self.safety.contains(bounds)
    }
}
