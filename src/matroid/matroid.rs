use crate::set::Set;

/// A matroid: a ground set `E` paired with a rank oracle.
///
/// A matroid is anything satisfying the rank-function axioms. Let `r` be a
/// rank function over subsets of `E`. Then:
///   * `0 <= r(X) <= |X|`
///   * if `X ⊆ Y` then `r(X) <= r(Y)` (monotone)
///   * `r(X ∪ Y) + r(X ∩ Y) <= r(X) + r(Y)` (submodular)
///
/// This trait does not verify those axioms; they are trusted, not checked.
pub trait Matroid {
    /// The ground set `E` this matroid is defined over.
    fn ground_set(&self) -> &Set;

    /// The rank oracle. `subset` must be a subset of `ground_set()`; rank
    /// of a non-subset is unspecified.
    fn rank(&self, subset: &Set) -> usize;

    /// `independent(S) ≡ |S| = rank(S)`.
    fn independent(&self, subset: &Set) -> bool {
        subset.cardinality() == self.rank(subset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matroid::UniformMatroid;
    use crate::set::{Element, ElementType};

    fn ground(n: usize) -> Set {
        let t = ElementType::new("VERTEX");
        Set::new(t.clone(), (0..n).map(|i| Element::tagged(t.clone(), i.to_string()))).unwrap()
    }

    #[test]
    fn independence_matches_rank() {
        let e = ground(5);
        let matroid = UniformMatroid::new(e.clone(), 3);

        for size in 0..=5 {
            let subset = Set::new(
                e.element_type().clone(),
                e.iter().take(size).cloned(),
            )
            .unwrap();
            assert_eq!(matroid.independent(&subset), subset.cardinality() == matroid.rank(&subset));
        }
    }
}
