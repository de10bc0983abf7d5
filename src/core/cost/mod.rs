pub mod compare;
pub mod pricing;

pub use compare::{compare, estimate};
pub use pricing::{billable_units, compute_cost, evaluate};
