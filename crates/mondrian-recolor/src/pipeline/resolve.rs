//! Resolver: the color written for a classified pixel.

use crate::color::{blend, Rgb};
use crate::palette::Reference;
use crate::params::Snapshot;

/// Color to write for `source`, given its classification.
///
/// - Matched: the reference's substitute, verbatim. The source RGB is
///   discarded.
/// - Unmatched: `source` blended toward the snapshot's background with the
///   transparency level as source weight.
///
/// # Example
///
/// ```
/// use mondrian_recolor::{resolve, Reference, Rgb, Snapshot};
///
/// let snapshot = Snapshot::new(Rgb::new(200, 200, 200))
///     .substitute(Reference::Red, Rgb::new(0, 255, 0))
///     .transparency(100);
///
/// let src = Rgb::new(250, 5, 5);
/// assert_eq!(resolve(src, Some(Reference::Red), &snapshot), Rgb::new(0, 255, 0));
/// assert_eq!(resolve(Rgb::new(10, 10, 10), None, &snapshot), Rgb::new(125, 125, 125));
/// ```
#[inline]
pub fn resolve(source: Rgb, class: Option<Reference>, snapshot: &Snapshot) -> Rgb {
    match class {
        Some(reference) => snapshot.substitutes.get(reference),
        None => blend(source, snapshot.background, snapshot.transparency.get()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot::new(Rgb::new(40, 80, 120))
            .substitute(Reference::Red, Rgb::new(1, 1, 1))
            .substitute(Reference::Yellow, Rgb::new(2, 2, 2))
            .substitute(Reference::Blue, Rgb::new(3, 3, 3))
    }

    #[test]
    fn test_matched_returns_substitute_verbatim() {
        let s = snapshot();
        let src = Rgb::new(99, 99, 99);
        assert_eq!(resolve(src, Some(Reference::Red), &s), Rgb::new(1, 1, 1));
        assert_eq!(resolve(src, Some(Reference::Yellow), &s), Rgb::new(2, 2, 2));
        assert_eq!(resolve(src, Some(Reference::Blue), &s), Rgb::new(3, 3, 3));
    }

    #[test]
    fn test_matched_ignores_transparency() {
        let src = Rgb::new(99, 99, 99);
        for t in [0, 100, 255] {
            let s = snapshot().transparency(t);
            assert_eq!(resolve(src, Some(Reference::Blue), &s), Rgb::new(3, 3, 3));
        }
    }

    #[test]
    fn test_unmatched_identity_and_background() {
        let src = Rgb::new(7, 130, 250);
        assert_eq!(resolve(src, None, &snapshot().transparency(255)), src);
        assert_eq!(
            resolve(src, None, &snapshot().transparency(0)),
            Rgb::new(40, 80, 120)
        );
    }
}
