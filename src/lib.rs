//! A library for matroid intersection: given two matroids sharing a ground
//! set, find a maximum-cardinality set independent in both.
//!
//! # Examples
//!
//! Two uniform matroids over the same five-element ground set intersect to
//! a common independent set of size equal to the smaller of the two ranks:
//!
//! ```
//! use matroid_intersection::intersection::intersect;
//! use matroid_intersection::matroid::{Matroid, UniformMatroid};
//! use matroid_intersection::set::{Element, ElementType, Set};
//!
//! let element_type = ElementType::new("VERTEX");
//! let ground_set = Set::new(
//!     element_type.clone(),
//!     (0..5).map(|i| Element::tagged(element_type.clone(), i.to_string())),
//! )
//! .unwrap();
//!
//! let m1 = UniformMatroid::new(ground_set.clone(), 2);
//! let m2 = UniformMatroid::new(ground_set, 3);
//!
//! let common_independent_set = intersect(&m1, &m2).unwrap();
//! assert_eq!(common_independent_set.cardinality(), 2);
//! ```
//!
//! A matroid and its dual obey the min-max rank law:
//!
//! ```
//! use matroid_intersection::matroid::{Dual, Matroid, UniformMatroid};
//! use matroid_intersection::set::{Element, ElementType, Set};
//!
//! let t = ElementType::new("VERTEX");
//! let ground_set = Set::new(
//!     t.clone(),
//!     (0..5).map(|i| Element::tagged(t.clone(), i.to_string())),
//! )
//! .unwrap();
//!
//! let matroid = UniformMatroid::new(ground_set.clone(), 2);
//! let dual = Dual::new(&matroid);
//!
//! // dual(U(2, E)).rank(E) == |E| - 2
//! assert_eq!(dual.rank(&ground_set), 3);
//! ```

pub mod error;
pub mod intersection;
pub mod matroid;
pub mod set;

pub use error::MatroidError;
