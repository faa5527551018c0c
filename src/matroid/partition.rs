use crate::error::MatroidError;
use crate::matroid::Matroid;
use crate::set::Set;

/// One block of a partition matroid: a subset of the ground set together
/// with the number of elements from it a common independent set may use.
#[derive(Debug, Clone)]
pub struct Block {
    set: Set,
    capacity: usize,
}

impl Block {
    pub fn new(set: Set, capacity: usize) -> Self {
        Block { set, capacity }
    }
}

/// The partition matroid: the ground set is a disjoint union of blocks
/// `B_i` with capacities `n_i`, and `rank(S) = Σ_i min(|S ∩ B_i|, n_i)`.
#[derive(Debug, Clone)]
pub struct PartitionMatroid {
    ground_set: Set,
    blocks: Vec<Block>,
}

impl PartitionMatroid {
    /// Builds a generalized partition matroid from explicit
    /// `(block, capacity)` pairs. Fails with `DisjointnessViolated` unless
    /// the blocks are pairwise disjoint and their union equals
    /// `ground_set` exactly.
    pub fn new(ground_set: Set, blocks: Vec<Block>) -> Result<Self, MatroidError> {
        let mut union = Set::empty(ground_set.element_type().clone());
        let mut summed_cardinality = 0;
        for block in &blocks {
            union = union.union(&block.set)?;
            summed_cardinality += block.set.cardinality();
        }

        // disjointness: if blocks overlapped, the running union would be
        // smaller than the sum of their individual cardinalities.
        if union.cardinality() != summed_cardinality || !union.equal(&ground_set) {
            return Err(MatroidError::DisjointnessViolated);
        }

        Ok(PartitionMatroid { ground_set, blocks })
    }

    /// The one-element-per-block convenience constructor: every block gets
    /// capacity 1.
    pub fn with_unit_capacity(ground_set: Set, blocks: Vec<Set>) -> Result<Self, MatroidError> {
        let blocks = blocks.into_iter().map(|set| Block::new(set, 1)).collect();
        PartitionMatroid::new(ground_set, blocks)
    }
}

impl Matroid for PartitionMatroid {
    fn ground_set(&self) -> &Set {
        &self.ground_set
    }

    fn rank(&self, subset: &Set) -> usize {
        self.blocks
            .iter()
            .map(|block| {
                let in_block = subset
                    .intersect(&block.set)
                    .expect("block and subset share the ground set's ElementType");
                in_block.cardinality().min(block.capacity)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::{Element, ElementType};

    fn elem(t: &ElementType, key: &str) -> Element {
        Element::tagged(t.clone(), key)
    }

    fn set(t: &ElementType, keys: &[&str]) -> Set {
        Set::new(t.clone(), keys.iter().map(|k| elem(t, k))).unwrap()
    }

    #[test]
    fn rank_matches_s4() {
        // S4: E = {a,b,c,d,e,f}, blocks B1={a,b,c} n1=1, B2={d,e} n2=2, B3={f} n3=1
        // => rank(E) = 1+2+1 = 4; rank({a,b,d,e,f}) = 1+2+1 = 4
        let t = ElementType::new("VERTEX");
        let e = set(&t, &["a", "b", "c", "d", "e", "f"]);
        let b1 = set(&t, &["a", "b", "c"]);
        let b2 = set(&t, &["d", "e"]);
        let b3 = set(&t, &["f"]);

        let matroid = PartitionMatroid::new(
            e.clone(),
            vec![Block::new(b1, 1), Block::new(b2, 2), Block::new(b3, 1)],
        )
        .unwrap();

        assert_eq!(matroid.rank(&e), 4);

        let subset = set(&t, &["a", "b", "d", "e", "f"]);
        assert_eq!(matroid.rank(&subset), 4);
    }

    #[test]
    fn overlapping_blocks_rejected() {
        let t = ElementType::new("VERTEX");
        let e = set(&t, &["a", "b", "c"]);
        let b1 = set(&t, &["a", "b"]);
        let b2 = set(&t, &["b", "c"]);

        let result = PartitionMatroid::new(e, vec![Block::new(b1, 1), Block::new(b2, 1)]);
        assert!(matches!(result, Err(MatroidError::DisjointnessViolated)));
    }

    #[test]
    fn blocks_not_covering_ground_set_rejected() {
        let t = ElementType::new("VERTEX");
        let e = set(&t, &["a", "b", "c"]);
        let b1 = set(&t, &["a", "b"]);

        let result = PartitionMatroid::new(e, vec![Block::new(b1, 1)]);
        assert!(matches!(result, Err(MatroidError::DisjointnessViolated)));
    }
}
