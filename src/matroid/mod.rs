//! The module for everything related to matroids: the `Matroid` trait
//! itself, the concrete families (uniform, partition, linear and dual),
//! and the greedy base builders.

#[allow(clippy::module_inception)]
mod matroid;

mod bases;
mod dual;
mod linear;
mod partition;
mod uniform;

pub use bases::{arbitrary_base, min_weight_base};
pub use dual::{dual, Dual};
pub use linear::LinearMatroid;
pub use matroid::Matroid;
pub use partition::{Block, PartitionMatroid};
pub use uniform::UniformMatroid;
