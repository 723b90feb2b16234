//! Responsive visible-slide count

use super::types::Breakpoints;

/// Largest number of slides shown side by side.
pub const MAX_VISIBLE: usize = 3;

/// Number of slides shown at once for a viewport `width`.
///
/// A step function: `>= desktop` shows three, `>= tablet` two, anything
/// narrower (including non-finite widths) one.
pub fn visible_count(width: f32, breakpoints: &Breakpoints) -> usize {
    if width >= breakpoints.desktop {
        MAX_VISIBLE
    } else if width >= breakpoints.tablet {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_widths_map_to_expected_counts() {
        let bp = Breakpoints::default();
        assert_eq!(visible_count(500.0, &bp), 1);
        assert_eq!(visible_count(800.0, &bp), 2);
        assert_eq!(visible_count(1200.0, &bp), 3);
    }

    #[test]
    fn breakpoints_are_inclusive_lower_bounds() {
        let bp = Breakpoints::default();
        assert_eq!(visible_count(767.9, &bp), 1);
        assert_eq!(visible_count(768.0, &bp), 2);
        assert_eq!(visible_count(1023.9, &bp), 2);
        assert_eq!(visible_count(1024.0, &bp), 3);
    }

    #[test]
    fn nan_width_falls_back_to_single_slide() {
        assert_eq!(visible_count(f32::NAN, &Breakpoints::default()), 1);
    }

    #[test]
    fn custom_breakpoints_are_respected() {
        let bp = Breakpoints {
            tablet: 600.0,
            desktop: 900.0,
        };
        assert_eq!(visible_count(650.0, &bp), 2);
        assert_eq!(visible_count(950.0, &bp), 3);
    }
}
