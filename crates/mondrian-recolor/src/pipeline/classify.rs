//! Classifier: which reference hue, if any, a pixel belongs to.

use crate::color::{within_threshold, Rgb};
use crate::palette::Reference;
use crate::params::Threshold;

/// Classify `pixel` against the fixed reference set.
///
/// References are tried in [`Reference::PRIORITY`] order and the first one
/// whose every channel differs by strictly less than `threshold` wins. A
/// pixel in range of two references is therefore always assigned to the
/// earlier one; the overlap is not reported.
///
/// # Example
///
/// ```
/// use mondrian_recolor::{classify, Reference, Rgb, Threshold};
///
/// let t = Threshold::clamped(80);
/// assert_eq!(classify(Rgb::new(240, 30, 20), t), Some(Reference::Red));
/// assert_eq!(classify(Rgb::new(128, 128, 128), t), None);
/// ```
#[inline]
pub fn classify(pixel: Rgb, threshold: Threshold) -> Option<Reference> {
    classify_against(pixel, &Reference::PRIORITY, threshold)
}

/// Classify against an explicit, ordered subset of references.
///
/// Order of `references` is the priority order.
pub fn classify_against(
    pixel: Rgb,
    references: &[Reference],
    threshold: Threshold,
) -> Option<Reference> {
    let t = threshold.get();
    if t == 0 {
        return None;
    }
    references
        .iter()
        .copied()
        .find(|r| within_threshold(pixel, r.color(), t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(v: i64) -> Threshold {
        Threshold::clamped(v)
    }

    #[test]
    fn test_exact_reference_matches() {
        for r in Reference::PRIORITY {
            assert_eq!(classify(r.color(), t(1)), Some(r));
        }
    }

    #[test]
    fn test_zero_threshold_matches_nothing() {
        for r in Reference::PRIORITY {
            assert_eq!(classify(r.color(), t(0)), None);
        }
    }

    #[test]
    fn test_tie_break_prefers_red_over_yellow() {
        // G channel is 128 from red and 127 from yellow: within 130 of both
        let pixel = Rgb::new(255, 128, 0);
        assert_eq!(classify(pixel, t(130)), Some(Reference::Red));
        // Out of red's range, only yellow remains
        assert_eq!(classify(pixel, t(128)), Some(Reference::Yellow));
    }

    #[test]
    fn test_tie_break_prefers_yellow_over_blue() {
        // Mid grey is within 150 of all three references
        let pixel = Rgb::new(128, 128, 128);
        let refs = [Reference::Yellow, Reference::Blue];
        assert_eq!(
            classify_against(pixel, &refs, t(150)),
            Some(Reference::Yellow)
        );
        let reversed = [Reference::Blue, Reference::Yellow];
        assert_eq!(
            classify_against(pixel, &reversed, t(150)),
            Some(Reference::Blue)
        );
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let pixel = Rgb::new(175, 0, 0);
        assert_eq!(classify(pixel, t(80)), None);
        assert_eq!(classify(pixel, t(81)), Some(Reference::Red));
    }

    #[test]
    fn test_grey_is_unmatched_at_default() {
        assert_eq!(classify(Rgb::new(10, 10, 10), Threshold::default()), None);
        assert_eq!(classify(Rgb::new(255, 255, 255), Threshold::default()), None);
    }
}
