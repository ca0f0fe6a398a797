use crate::constants::{BLEED_IN, SAFETY_IN};
use crate::types::*;

/// Printer-facing summary of a resolved format
#[derive(Debug, Clone, PartialEq)]
pub struct PrintSpecification {
    pub format_id: String,
    pub format_name: String,
    /// Final cut size
    pub trim: Dimensions,
    /// Page size including bleed
    pub bled: Dimensions,
    /// Bleed on each edge
    pub bleed_in: f64,
    /// Safety inset inside the trim line
    pub safety_in: f64,
    /// Area inside the safety margin
    pub live_area: Dimensions,
    pub gutter_in: f64,
    /// Present for spreads only
    pub spine_in: Option<f64>,
    pub is_spread: bool,
    pub page_count: Option<u32>,
    pub binding: Binding,
}

/// Calculate the print specification for a resolved format
pub fn calculate_specification(format: &BookFormat, binding: Binding) -> PrintSpecification {
    let trim = format.no_bleed();

    PrintSpecification {
        format_id: format.id().to_string(),
        format_name: format.name().to_string(),
        trim,
        bled: format.with_bleed(),
        bleed_in: BLEED_IN,
        safety_in: SAFETY_IN,
        live_area: trim.inset(SAFETY_IN),
        gutter_in: format.gutter_width(),
        spine_in: format.spine_width(),
        is_spread: format.is_spread(),
        page_count: format.page_count(),
        binding,
    }
}
