//! Field-level candidate gathering.

mod pairwise;

pub use pairwise::pairwise_union_intersection;
