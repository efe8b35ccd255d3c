//! Substring-containment classification of two values.

use super::Relation;

/// Classify the ordered pair `(left, right)`.
///
/// Equality wins over containment, so two equal values are never reported as
/// deriving from each other. Comparison is exact: no case or whitespace folding.
pub fn classify(left: &str, right: &str) -> Relation {
    if left == right {
        Relation::IsEqualTo
    } else if left.contains(right) {
        Relation::LeftDerivedFromRight
    } else if right.contains(left) {
        Relation::RightDerivedFromLeft
    } else {
        Relation::Unrelated
    }
}
