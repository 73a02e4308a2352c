//! Turns net balances into a short list of payments that settles everybody.
//!
//! This is a greedy heuristic, not an exact minimum-transaction solver (that
//! problem is NP-hard). The member owed the most is matched with the member
//! owing the most, the smaller of the two amounts changes hands, and whoever
//! reached zero drops out. Every step settles at least one member, so a group
//! with `c` creditors and `d` debtors never needs more than `c + d - 1`
//! payments.
//!
//! Members with equal balances keep the order they had in the input: the sort
//! is stable and there is no secondary key.

use super::{balance::Balance, member::Member, Amount};

use std::collections::HashMap;
use tracing::{debug, warn};

/// One payment: `from` should pay `to` `amount` minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifiedTransaction {
    pub from: Member,
    pub to: Member,
    pub amount: Amount,
}

/// How much a creditor is still owed, or a debtor still owes. Always positive
/// while the member is in play.
struct Position<'a> {
    member: &'a Member,
    remaining: Amount,
}

/// Compute the payments settling `balances`.
///
/// `balances` are expected to sum to zero, as they do when computed from a
/// consistent group. When they don't, whatever is left once one side runs out
/// is not distributed.
pub fn get_simplified_transactions(
    balances: &[Balance],
    members: &[Member],
) -> Vec<SimplifiedTransaction> {
    let members: HashMap<&str, &Member> = members.iter().map(|m| (m.id.as_str(), m)).collect();

    let mut creditors = Vec::new();
    let mut debtors = Vec::new();
    for balance in balances.iter().filter(|b| b.balance != 0) {
        let Some(&member) = members.get(balance.member_id.as_str()) else {
            warn!(
                member_id = %balance.member_id,
                balance = balance.balance,
                "balance refers to an unknown member, leaving it out"
            );
            continue;
        };

        let position = Position {
            member,
            // `Amount::MIN` has no positive counterpart.
            remaining: balance.balance.saturating_abs(),
        };
        if balance.balance > 0 {
            creditors.push(position);
        } else {
            debtors.push(position);
        }
    }

    // Largest amounts first on both sides. `sort_by` is stable.
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut transactions = Vec::new();
    let (mut creditor_index, mut debtor_index) = (0, 0);

    while creditor_index < creditors.len() && debtor_index < debtors.len() {
        let creditor = &mut creditors[creditor_index];
        let debtor = &mut debtors[debtor_index];

        let amount = creditor.remaining.min(debtor.remaining);
        transactions.push(SimplifiedTransaction {
            from: debtor.member.clone(),
            to: creditor.member.clone(),
            amount,
        });
        creditor.remaining -= amount;
        debtor.remaining -= amount;

        if creditor.remaining == 0 {
            creditor_index += 1;
        }
        if debtor.remaining == 0 {
            debtor_index += 1;
        }
    }

    let leftover: Amount = creditors[creditor_index..]
        .iter()
        .chain(&debtors[debtor_index..])
        .map(|p| p.remaining)
        .fold(0, Amount::saturating_add);
    if leftover != 0 {
        warn!(leftover, "balances don't sum to zero, some of them stay unsettled");
    }

    debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transactions = transactions.len(),
        "simplified debts"
    );

    transactions
}
