//! Allocation Strategies
//!
//! Risk resolution and budget splitting across asset classes.

mod allocation;
mod risk;

pub use allocation::{AllocationStrategy, Allocations, allocate, coerce_budget, round_amount};
pub use risk::resolve;
