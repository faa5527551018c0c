use std::fmt::{self, Debug, Formatter};

use crate::matroid::Matroid;
use crate::set::Set;

/// The dual matroid of a matroid.
///
/// `rank*(S) = rank(E∖S) + |S| − rank(E)`. A `Dual` does not own its
/// ground set; it borrows the base matroid's rather than cloning it, and
/// must not outlive it.
pub struct Dual<'a, M: Matroid> {
    matroid: &'a M,
}

impl<'a, M: Matroid> Dual<'a, M> {
    pub fn new(matroid: &'a M) -> Self {
        Dual { matroid }
    }
}

impl<'a, M: Matroid> Matroid for Dual<'a, M> {
    fn ground_set(&self) -> &Set {
        self.matroid.ground_set()
    }

    fn rank(&self, subset: &Set) -> usize {
        let complement = self
            .matroid
            .ground_set()
            .complement(subset)
            .expect("subset passed to Dual::rank must be a subset of the ground set");
        self.matroid.rank(&complement) + subset.cardinality()
            - self.matroid.rank(self.matroid.ground_set())
    }
}

impl<'a, M: Matroid + Debug> Debug for Dual<'a, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dual").field("matroid", &self.matroid).finish()
    }
}

/// Free function form, mirroring `intersect`/`arbitrary_base`.
pub fn dual<M: Matroid>(matroid: &M) -> Dual<'_, M> {
    Dual::new(matroid)
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
    fn dual_of_uniform_rank_of_ground_set() {
        // S7: dual(Uniform(E,k)).rank(E) == |E|-k; for |E|=5, k=2, expect 3.
        let e = ground(5);
        let matroid = UniformMatroid::new(e.clone(), 2);
        let dual = Dual::new(&matroid);

        assert_eq!(dual.rank(&e), 3);
    }

    #[test]
    fn double_dual_has_the_same_rank_as_the_base_matroid() {
        let e = ground(6);
        let matroid = UniformMatroid::new(e.clone(), 2);
        let dual = Dual::new(&matroid);
        let double_dual = Dual::new(&dual);

        for size in 0..=e.cardinality() {
            let subset = Set::new(e.element_type().clone(), e.iter().take(size).cloned()).unwrap();
            assert_eq!(matroid.rank(&subset), double_dual.rank(&subset));
        }
    }

    #[test]
    fn dual_satisfies_min_max_law() {
        // testable property 5: dual(M).rank(S) == M.rank(E\S) + |S| - M.rank(E)
        let e = ground(5);
        let matroid = UniformMatroid::new(e.clone(), 3);
        let dual = Dual::new(&matroid);

        let s = Set::new(
            e.element_type().clone(),
            e.iter().take(2).cloned(),
        )
        .unwrap();
        let complement = e.complement(&s).unwrap();

        let expected = matroid.rank(&complement) + s.cardinality() - matroid.rank(&e);
        assert_eq!(dual.rank(&s), expected);
    }
}
