//! Fatigue-aware 0/1 knapsack over study sessions.
//!
//! Every subject yields exactly one candidate session. The table walks the
//! candidates in input order and, for every capacity, keeps the best value
//! plus how many sessions that best sub-solution already holds. The session
//! count of the cell a candidate would extend discounts its value.

mod candidate;
mod core;
mod table;

pub use candidate::SessionCandidate;
pub use core::{schedule, solve, KnapsackSolution, Pick, SchedulerError};
pub use table::DpTable;
