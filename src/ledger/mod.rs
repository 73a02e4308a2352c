//! The balance and debt-simplification engine, plus the group aggregate it
//! reads from.
//!
//! The two entry points are pure functions:
//! - [`balance::calculate_balances`] folds a group's expenses and settlements
//!   into one net balance per member.
//! - [`simplify::get_simplified_transactions`] turns those balances into a
//!   short list of payments that settles everybody.

pub mod balance;
pub mod expense;
pub mod group;
pub mod member;
pub mod money;
pub mod settlement;
pub mod simplify;

pub use balance::{calculate_balances, Balance, BalanceStatus};
pub use expense::{split_equally, Expense, ExpenseCategory, ParticipantSplit};
pub use group::Group;
pub use member::Member;
pub use settlement::Settlement;
pub use simplify::{get_simplified_transactions, SimplifiedTransaction};

// Named types don't provide any compiler help, but they help a lot with
// readability.
// Compare `HashMap<String, i64>` with `HashMap<MemberId, Amount>`: the second
// one needs no comment.
pub type MemberId = String;
pub type ExpenseId = String;
pub type SettlementId = String;

// Every amount in the engine is an integer number of minor units (e.g. cents).
// Decimals only exist at the edges, see `money`.
pub type Amount = i64;
