//! Shared group expenses: who owes what, and the fewest payments to settle up.
//!
//! The core lives in [`ledger`]: [`ledger::calculate_balances`] and
//! [`ledger::get_simplified_transactions`] are pure functions of a
//! [`ledger::Group`]. The other modules feed them from a CSV ledger and write
//! their results back out as CSV:
//!
//! input (CSV rows) -> assemble (Group) -> ledger (balances, transactions) -> output (CSV)

pub mod assemble;
pub mod error_handler;
pub mod input;
pub mod ledger;
pub mod output;
pub mod run;
