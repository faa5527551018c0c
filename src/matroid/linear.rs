use nalgebra::DMatrix;

use crate::error::MatroidError;
use crate::matroid::Matroid;
use crate::set::{Element, ElementType, Set, Value};

/// The default tolerance for the SVD-based numerical rank test.
const DEFAULT_EPSILON: f64 = 1e-10;

/// The linear matroid: elements are real vectors, and `rank(S)` is the
/// numerical rank of the matrix whose rows are `S`'s vectors, computed via
/// SVD against a tolerance `epsilon`.
#[derive(Debug, Clone)]
pub struct LinearMatroid {
    ground_set: Set,
    epsilon: f64,
}

impl LinearMatroid {
    /// Builds a linear matroid using the default SVD tolerance.
    pub fn new(ground_set: Set) -> Self {
        LinearMatroid {
            ground_set,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Builds a linear matroid with an explicit tolerance. Fails with
    /// `NegativeTolerance` if `epsilon < 0`.
    pub fn with_epsilon(ground_set: Set, epsilon: f64) -> Result<Self, MatroidError> {
        if epsilon < 0.0 {
            return Err(MatroidError::NegativeTolerance(epsilon));
        }
        Ok(LinearMatroid { ground_set, epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Builds a vector-valued element keyed by its canonical
    /// parenthesized, comma-joined, six-decimal coordinate format.
    pub fn vector(element_type: ElementType, values: Vec<f64>, weight: f64) -> Element {
        let key = vector_key(&values);
        Element::new(element_type, key, Value::Vector(values), weight)
    }
}

fn vector_key(values: &[f64]) -> String {
    let joined = values
        .iter()
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<_>>()
        .join(",");
    format!("({})", joined)
}

impl Matroid for LinearMatroid {
    fn ground_set(&self) -> &Set {
        &self.ground_set
    }

    fn rank(&self, subset: &Set) -> usize {
        if subset.is_empty() {
            return 0;
        }

        let rows: Vec<&Vec<f64>> = subset
            .iter()
            .map(|e| match e.value() {
                Value::Vector(v) => v,
                Value::Tag => panic!("LinearMatroid elements must carry a Vector payload"),
            })
            .collect();

        let ncols = rows[0].len();
        debug_assert!(
            rows.iter().all(|r| r.len() == ncols),
            "all vectors in a linear matroid must share a common dimension"
        );

        let nrows = rows.len();
        let data: Vec<f64> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        let matrix = DMatrix::from_row_slice(nrows, ncols, &data);
        matrix.rank(self.epsilon)
    }
}
