//! Bounded ordered sequences.
//!
//! Nodes keep their keys and children in [`OrderedSeq`], a capacity-bounded
//! double-ended sequence with index addressing and comparator search.
//!
//! # Components
//! - [`OrderedSeq`] - The sequence container
//! - [`Position`] - Result of a comparator search (hit or insertion point)

mod ordered;

pub use ordered::{OrderedSeq, Position};
