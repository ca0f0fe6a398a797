pub mod catalog;
pub mod constants;
pub mod layout;
mod options;
pub mod resolver;
pub mod rules;
mod specification;
pub mod template;
mod types;

pub use catalog::{CatalogEntry, FormatCatalog};
pub use layout::{
    DeviceScale, GuideLayout, GuideOptions, Rect, compute_guides, elements_outside_safety,
};
pub use options::*;
pub use resolver::{FormatResolver, FormatSource, SpreadToggle, apply_specs};
pub use rules::{gutter_width, hardcover_spine_width, paperback_spine_width};
pub use specification::*;
pub use template::{ElementKind, Template, TemplateElement};
pub use types::*;
