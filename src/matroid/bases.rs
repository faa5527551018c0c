use crate::matroid::Matroid;
use crate::set::Set;

/// Greedily grows an arbitrary base: walk the ground set in whatever order
/// `iter()` yields it, keeping each element that leaves the accumulator
/// independent. A matroid's independence axioms guarantee the result is
/// inclusion-maximal, hence a base.
pub fn arbitrary_base<M: Matroid>(matroid: &M) -> Set {
    let mut base = Set::empty(matroid.ground_set().element_type().clone());
    for e in matroid.ground_set().iter() {
        let mut candidate = base.clone();
        candidate.add(e.clone()).expect("ground set elements share one ElementType");
        if matroid.independent(&candidate) {
            base = candidate;
        }
    }
    base
}

/// The matroid greedy algorithm: visit elements in ascending weight order,
/// keeping each one that leaves the accumulator independent. This produces
/// a base of minimum total weight.
pub fn min_weight_base<M: Matroid>(matroid: &M) -> Set {
    let mut elements: Vec<_> = matroid.ground_set().iter().cloned().collect();
    elements.sort_by(|a, b| {
        a.weight()
            .partial_cmp(&b.weight())
            .expect("element weights must not be NaN")
    });

    let mut base = Set::empty(matroid.ground_set().element_type().clone());
    for e in elements {
        let mut candidate = base.clone();
        candidate.add(e).expect("ground set elements share one ElementType");
        if matroid.independent(&candidate) {
            base = candidate;
        }
    }
    base
}
