use log::debug;

use crate::error::MatroidError;
use crate::matroid::Matroid;
use crate::set::Set;

use super::graph;
use super::path::shortest_augmenting_path;

/// The intersection driver's state machine: bootstrap a common independent
/// set, then alternate searching the exchange graph for an augmenting path
/// and augmenting along it, until search comes up empty.
enum State {
    Bootstrapping,
    Searching,
    Augmenting(Vec<String>),
    Done,
}

/// Finds a maximum common independent set of `m1` and `m2`: a set
/// independent in both matroids, of maximum cardinality among all such
/// sets.
///
/// Fails with `IncompatibleGroundSets` if the two matroids are not defined
/// over the same ground set. Every other failure mode here is a bug, not a
/// runtime error, since `Matroid::independent` is trusted to uphold the
/// rank axioms.
pub fn intersect<M1, M2>(m1: &M1, m2: &M2) -> Result<Set, MatroidError>
where
    M1: Matroid + Sync,
    M2: Matroid + Sync,
{
    if m1.ground_set().element_type() != m2.ground_set().element_type()
        || !m1.ground_set().equal(m2.ground_set())
    {
        return Err(MatroidError::IncompatibleGroundSets);
    }

    let mut s = Set::empty(m1.ground_set().element_type().clone());
    let mut state = State::Bootstrapping;
    let mut iteration = 0;

    loop {
        state = match state {
            State::Bootstrapping => {
                // greedy maximal-by-inclusion: a cheap starting point that
                // search-and-augment can only ever improve on.
                for e in m1.ground_set().iter() {
                    let mut candidate = s.clone();
                    candidate.add(e.clone()).expect("ground set shares one ElementType");
                    if m1.independent(&candidate) && m2.independent(&candidate) {
                        s = candidate;
                    }
                }
                debug!("bootstrap produced a common independent set of size {}", s.cardinality());
                State::Searching
            }

            State::Searching => {
                let exchange_graph = graph::build(m1, m2, &s);
                match shortest_augmenting_path(&exchange_graph.graph, exchange_graph.source, exchange_graph.sink) {
                    Some(path) => State::Augmenting(path),
                    None => State::Done,
                }
            }

            State::Augmenting(path_keys) => {
                let path_set = m1.ground_set().cond_subset(|e| path_keys.iter().any(|k| k == e.key()));
                s = s
                    .symmetric_difference(&path_set)
                    .expect("path_set was built from m1's ground set");
                iteration += 1;
                debug!("augmentation {} grew the common independent set to size {}", iteration, s.cardinality());
                State::Searching
            }

            State::Done => break,
        };
    }

    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matroid::{PartitionMatroid, UniformMatroid};
    use crate::set::{Element, ElementType};

    fn ground(n: usize) -> Set {
        let t = ElementType::new("VERTEX");
        Set::new(t.clone(), (0..n).map(|i| Element::tagged(t.clone(), i.to_string()))).unwrap()
    }

    #[test]
    fn incompatible_ground_sets_rejected() {
        let t = ElementType::new("VERTEX");
        let a = Set::new(t.clone(), [Element::tagged(t.clone(), "a")]).unwrap();
        let b = Set::new(t.clone(), [Element::tagged(t, "b")]).unwrap();

        let m1 = UniformMatroid::new(a, 1);
        let m2 = UniformMatroid::new(b, 1);

        assert!(matches!(intersect(&m1, &m2), Err(MatroidError::IncompatibleGroundSets)));
    }

    #[test]
    fn ground_sets_with_matching_keys_but_different_types_rejected() {
        let t1 = ElementType::new("VERTEX");
        let t2 = ElementType::new("ARC");
        let a = Set::new(t1.clone(), [Element::tagged(t1, "0")]).unwrap();
        let b = Set::new(t2.clone(), [Element::tagged(t2, "0")]).unwrap();

        let m1 = UniformMatroid::new(a, 1);
        let m2 = UniformMatroid::new(b, 1);

        assert!(matches!(intersect(&m1, &m2), Err(MatroidError::IncompatibleGroundSets)));
    }

    #[test]
    fn two_uniform_matroids_intersect_to_the_smaller_rank() {
        // S6: U(2, E) ∩ U(3, E) over |E|=5 has a maximum common
        // independent set of size 2.
        let e = ground(5);
        let m1 = UniformMatroid::new(e.clone(), 2);
        let m2 = UniformMatroid::new(e, 3);

        let result = intersect(&m1, &m2).unwrap();
        assert_eq!(result.cardinality(), 2);
        assert!(m1.independent(&result) && m2.independent(&result));
    }

    #[test]
    fn partition_meets_uniform() {
        // S5: a partition matroid with blocks {0,1}/n=1 and {2,3,4}/n=1
        // against U(2, E) has a maximum common independent set of size 2.
        let t = ElementType::new("VERTEX");
        let e = ground(5);
        let b1 = Set::new(t.clone(), [Element::tagged(t.clone(), "0"), Element::tagged(t.clone(), "1")]).unwrap();
        let b2 = Set::new(
            t.clone(),
            [
                Element::tagged(t.clone(), "2"),
                Element::tagged(t.clone(), "3"),
                Element::tagged(t.clone(), "4"),
            ],
        )
        .unwrap();

        let m1 = PartitionMatroid::with_unit_capacity(e.clone(), vec![b1, b2]).unwrap();
        let m2 = UniformMatroid::new(e, 2);

        let result = intersect(&m1, &m2).unwrap();
        assert_eq!(result.cardinality(), 2);
        assert!(m1.independent(&result) && m2.independent(&result));
    }

    #[test]
    fn empty_ground_set_intersects_to_empty() {
        let t = ElementType::new("VERTEX");
        let e = Set::empty(t);
        let m1 = UniformMatroid::new(e.clone(), 0);
        let m2 = UniformMatroid::new(e, 0);

        let result = intersect(&m1, &m2).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn a_matroid_against_itself_reaches_its_own_rank() {
        let e = ground(4);
        let m1 = UniformMatroid::new(e.clone(), 3);
        let m2 = UniformMatroid::new(e.clone(), 3);

        let result = intersect(&m1, &m2).unwrap();
        assert_eq!(result.cardinality(), 3);
    }

    #[test]
    fn zero_rank_matroid_intersects_to_empty() {
        let e = ground(4);
        let m1 = UniformMatroid::new(e.clone(), 0);
        let m2 = UniformMatroid::new(e, 4);

        let result = intersect(&m1, &m2).unwrap();
        assert!(result.is_empty());
    }
}
