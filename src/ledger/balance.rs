//! Net balance of every member of a group.
//!
//! Balances are never stored: they are folded from scratch out of the group's
//! expenses and settlements every time they are asked for.

use super::{group::Group, Amount, MemberId};

use std::collections::HashMap;
use tracing::warn;

/// Where a member stands once everything is netted out.
/// Positive: the group owes them money. Negative: they owe the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub member_id: MemberId,
    pub name: String,
    pub balance: Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    Owed,
    Owes,
    Settled,
}

impl Balance {
    pub fn status(&self) -> BalanceStatus {
        match self.balance {
            b if b > 0 => BalanceStatus::Owed,
            b if b < 0 => BalanceStatus::Owes,
            _ => BalanceStatus::Settled,
        }
    }
}

/// A running sum of credits (money fronted for others) and debits (money
/// others fronted for you) for one member.
///
/// Sums are kept in `i128` so that no sequence of `Amount`s can overflow them.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    credit: i128,
    debit: i128,
}

impl Tally {
    /// Net amount, saturated to the `Amount` range.
    fn amount(&self) -> Amount {
        let net = self.credit - self.debit;
        Amount::try_from(net).unwrap_or(if net < 0 { Amount::MIN } else { Amount::MAX })
    }
}

/// Compute one [`Balance`] per member, in `group.members` order.
///
/// Each expense credits its payer with the full amount and debits every
/// participant with their share (the payer included, when they take part).
/// Each settlement credits the sender and debits the receiver.
///
/// Amounts referring to a member outside of `group.members` can't be
/// attributed to anybody: they are logged and left out of the result.
///
/// Intermediate sums can't overflow. A net balance outside of the `Amount`
/// range saturates to `Amount::MIN` or `Amount::MAX`.
pub fn calculate_balances(group: &Group) -> Vec<Balance> {
    let mut tallies: HashMap<&str, Tally> = group
        .members
        .iter()
        .map(|member| (member.id.as_str(), Tally::default()))
        .collect();

    for expense in &group.expenses {
        if let Some(tally) = tally_for(&mut tallies, &expense.payer_id, &expense.id) {
            tally.credit += i128::from(expense.amount);
        }
        for split in &expense.participants {
            if let Some(tally) = tally_for(&mut tallies, &split.member_id, &expense.id) {
                tally.debit += i128::from(split.share);
            }
        }
    }

    for settlement in &group.settlements {
        if let Some(tally) = tally_for(&mut tallies, &settlement.from_id, &settlement.id) {
            tally.credit += i128::from(settlement.amount);
        }
        if let Some(tally) = tally_for(&mut tallies, &settlement.to_id, &settlement.id) {
            tally.debit += i128::from(settlement.amount);
        }
    }

    group
        .members
        .iter()
        .map(|member| Balance {
            member_id: member.id.clone(),
            name: member.name.clone(),
            balance: tallies
                .get(member.id.as_str())
                .map(Tally::amount)
                .unwrap_or_default(),
        })
        .collect()
}

fn tally_for<'a>(
    tallies: &'a mut HashMap<&str, Tally>,
    member_id: &str,
    record_id: &str,
) -> Option<&'a mut Tally> {
    let tally = tallies.get_mut(member_id);
    if tally.is_none() {
        warn!(member_id, record_id, "amount refers to an unknown member, dropping it");
    }
    tally
}
