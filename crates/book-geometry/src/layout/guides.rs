//! Guide rectangle calculation

use crate::constants::{BLEED_IN, SAFETY_IN};
use crate::template::Template;
use crate::types::BookFormat;

use super::{DeviceScale, GuideLayout, GuideOptions, Rect};

/// Compute the trim, safety, gutter and spine regions for `format`.
///
/// The page rectangle is the bled size scaled to device units at the
/// origin. Trim sits one bleed inside it, safety one safety margin inside
/// trim. Gutter and spine are independent bands centered on the page's
/// horizontal midpoint and may overlap.
pub fn compute_guides(format: &BookFormat, scale: DeviceScale, options: GuideOptions) -> GuideLayout {
    let bled = format.with_bleed();
    let page = Rect::new(0.0, 0.0, scale.to_device(bled.width), scale.to_device(bled.height));
    let trim = page.inset(scale.to_device(BLEED_IN));
    let safety = trim.inset(scale.to_device(SAFETY_IN));

    let gutter = (format.is_spread() && options.show_gutter)
        .then(|| page.vertical_band(scale.to_device(format.gutter_width())));

    let spine = format
        .spine_width()
        .filter(|&spine| format.is_spread() && options.show_spine && spine > 0.0)
        .map(|spine| page.vertical_band(scale.to_device(spine)));

    GuideLayout {
        page,
        trim,
        safety,
        gutter,
        spine,
    }
}

/// Ids of elements whose rotated bounding box leaves the safety area
pub fn elements_outside_safety(template: &Template, scale: DeviceScale) -> Vec<String> {
    let guides = compute_guides(template.format(), scale, GuideOptions::default());
    template
        .elements()
        .iter()
        .filter(|element| !guides.is_within_safety(&element.rotated_bounds()))
        .map(|element| element.id.clone())
        .collect()
}
