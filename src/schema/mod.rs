//! Declaration tree model: fields, groups, separators and their visibility
//! conditions. This is the canonical input structure callers build (or load
//! from JSON) and hand to the form session on every pass.

pub mod condition;
pub mod field;
pub mod group;
pub mod node;
pub mod separator;

pub use condition::*;
pub use field::*;
pub use group::*;
pub use node::*;
pub use separator::*;
