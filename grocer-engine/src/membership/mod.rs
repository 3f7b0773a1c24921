//! Membership model — fuzzy variables and their triangular sets.

pub mod model;
pub mod triangle;
pub mod variable;

pub use model::{MembershipModel, Signal};
pub use triangle::TriangularMf;
pub use variable::{FuzzySet, FuzzyVariable};
