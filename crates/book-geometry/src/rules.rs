//! Print specification rules
//!
//! Pure functions turning a page count into physical measurements.
//! Page counts are taken as `i64` so that out-of-contract negative input
//! yields a number rather than a panic.

use crate::types::Binding;

/// Hardcover spine width schedule.
///
/// Each entry is (inclusive upper page count, spine width in inches).
/// Counts below 24 have no spine; counts above the last bound use
/// [`HARDCOVER_MAX_SPINE_IN`]. This is a paper-stock thickness table.
pub const HARDCOVER_SPINE_SCHEDULE: [(i64, f64); 19] = [
    (84, 0.25),
    (140, 0.5),
    (168, 0.625),
    (194, 0.688),
    (222, 0.75),
    (250, 0.813),
    (278, 0.875),
    (306, 0.938),
    (334, 1.0),
    (360, 1.063),
    (388, 1.125),
    (416, 1.188),
    (444, 1.25),
    (472, 1.313),
    (500, 1.375),
    (528, 1.438),
    (556, 1.5),
    (582, 1.563),
    (i64::MAX, HARDCOVER_MAX_SPINE_IN),
];

/// Smallest page count that receives a hardcover spine
pub const HARDCOVER_MIN_PAGES: i64 = 24;

/// Spine width for anything past the last schedule bracket
pub const HARDCOVER_MAX_SPINE_IN: f64 = 1.625;

/// Pages per inch of paperback interior stock
pub const PAPERBACK_PAGES_PER_INCH: f64 = 444.0;

/// Cover board allowance added to every paperback spine
pub const PAPERBACK_COVER_IN: f64 = 0.06;

/// Gutter width for a page count.
///
/// Brackets: <60 none, 60-150 0.125in, 151-400 0.5in, 401-600 0.625in,
/// beyond that 0.75in.
pub fn gutter_width(page_count: i64) -> f64 {
    if page_count < 60 {
        0.0
    } else if page_count <= 150 {
        0.125
    } else if page_count <= 400 {
        0.5
    } else if page_count <= 600 {
        0.625
    } else {
        0.75
    }
}

/// Paperback spine width: one inch per 444 pages plus the cover allowance.
pub fn paperback_spine_width(page_count: i64) -> f64 {
    page_count as f64 / PAPERBACK_PAGES_PER_INCH + PAPERBACK_COVER_IN
}

/// Hardcover spine width looked up in [`HARDCOVER_SPINE_SCHEDULE`].
pub fn hardcover_spine_width(page_count: i64) -> f64 {
    if page_count < HARDCOVER_MIN_PAGES {
        return 0.0;
    }

    HARDCOVER_SPINE_SCHEDULE
        .iter()
        .find(|(upper, _)| page_count <= *upper)
        .map(|&(_, width)| width)
        .unwrap_or(HARDCOVER_MAX_SPINE_IN)
}

impl Binding {
    /// Spine width for this binding method
    pub fn spine_width(self, page_count: i64) -> f64 {
        match self {
            Binding::Paperback => paperback_spine_width(page_count),
            Binding::Hardcover => hardcover_spine_width(page_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gutter_brackets() {
        let cases = [
            (0, 0.0),
            (59, 0.0),
            (60, 0.125),
            (150, 0.125),
            (151, 0.5),
            (400, 0.5),
            (401, 0.625),
            (600, 0.625),
            (601, 0.75),
            (10_000, 0.75),
        ];
        for (pages, expected) in cases {
            assert_eq!(gutter_width(pages), expected, "pages = {}", pages);
        }
    }

    #[test]
    fn test_gutter_negative_does_not_panic() {
        assert_eq!(gutter_width(-5), 0.0);
    }

    #[test]
    fn test_paperback_spine() {
        assert!((paperback_spine_width(444) - 1.06).abs() < 1e-12);
        assert!((paperback_spine_width(0) - 0.06).abs() < 1e-12);
        assert!((paperback_spine_width(222) - 0.56).abs() < 1e-12);
    }

    #[test]
    fn test_hardcover_bracket_edges() {
        assert_eq!(hardcover_spine_width(0), 0.0);
        assert_eq!(hardcover_spine_width(23), 0.0);
        assert_eq!(hardcover_spine_width(24), 0.25);
        assert_eq!(hardcover_spine_width(84), 0.25);
        assert_eq!(hardcover_spine_width(85), 0.5);
        assert_eq!(hardcover_spine_width(334), 1.0);
        assert_eq!(hardcover_spine_width(582), 1.563);
        assert_eq!(hardcover_spine_width(583), 1.625);
        assert_eq!(hardcover_spine_width(600), 1.625);
    }

    #[test]
    fn test_hardcover_non_decreasing() {
        let mut previous = hardcover_spine_width(-10);
        for pages in -10..=1_000 {
            let width = hardcover_spine_width(pages);
            assert!(width >= previous, "dropped at {} pages", pages);
            previous = width;
        }
    }

    #[test]
    fn test_binding_dispatch() {
        assert_eq!(Binding::Hardcover.spine_width(100), 0.5);
        assert_eq!(
            Binding::Paperback.spine_width(100),
            paperback_spine_width(100)
        );
    }
}
