//! Guide geometry
//!
//! Computes the advisory regions drawn over a page:
//! - Trim line (final cut)
//! - Safety area (content guaranteed not to be cropped)
//! - Gutter and spine bands for cover spreads

mod guides;
mod types;

pub use guides::*;
pub use types::*;
