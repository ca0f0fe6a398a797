//! Shared constants for book geometry
//!
//! Physical allowances are expressed in inches, the unit every trim size
//! in the catalog is authored in.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// PDF points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert inches to millimetres
#[inline]
pub fn in_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Convert millimetres to inches
#[inline]
pub fn mm_to_in(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Convert inches to PDF points
#[inline]
pub fn in_to_pt(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

// =============================================================================
// Print Allowances
// =============================================================================

/// Bleed on each edge of the page (inches)
pub const BLEED_IN: f64 = 0.125;

/// Total bleed added to each dimension (one allowance per edge)
pub const BLEED_ALLOWANCE_IN: f64 = BLEED_IN * 2.0;

/// Safety inset inside the trim line (inches)
pub const SAFETY_IN: f64 = 0.25;

// =============================================================================
// Custom Sizes
// =============================================================================

/// Smallest custom trim dimension accepted at the input boundary (inches)
pub const MIN_CUSTOM_IN: f64 = 3.0;

/// Largest custom trim dimension accepted at the input boundary (inches)
pub const MAX_CUSTOM_IN: f64 = 12.0;

/// Format id given to every custom-built format
pub const CUSTOM_FORMAT_ID: &str = "custom";

/// Display name given to every custom-built format
pub const CUSTOM_FORMAT_NAME: &str = "Custom";

// =============================================================================
// Editor Defaults
// =============================================================================

/// Default device scale (CSS pixels per inch)
pub const DEFAULT_PIXELS_PER_INCH: f64 = 96.0;

/// Name stamped on new templates
pub const DEFAULT_TEMPLATE_NAME: &str = "Untitled Template";

/// Format selected when nothing else is configured
pub const DEFAULT_FORMAT_ID: &str = "usTrade";

/// Offset applied to a duplicated element on both axes (device pixels)
pub const DUPLICATE_OFFSET_PX: f64 = 20.0;
