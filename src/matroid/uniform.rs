use crate::matroid::Matroid;
use crate::set::Set;

/// The `U(k, E)` uniform matroid: every subset of `k` or fewer elements is
/// independent.
#[derive(Debug, Clone)]
pub struct UniformMatroid {
    ground_set: Set,
    k: usize,
}

impl UniformMatroid {
    pub fn new(ground_set: Set, k: usize) -> Self {
        UniformMatroid { ground_set, k }
    }

    /// The independence bound `k`.
    pub fn k(&self) -> usize {
        self.k
    }
}

impl Matroid for UniformMatroid {
    fn ground_set(&self) -> &Set {
        &self.ground_set
    }

    fn rank(&self, subset: &Set) -> usize {
        subset.cardinality().min(self.k)
    }
}
