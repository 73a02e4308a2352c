//! Builds a [`Group`] out of a stream of ledger records.
//!
//! This is the ledger-store side of the engine: it is the one place making
//! sure every expense's shares add up to its amount before the group is handed
//! over to the balance calculation. It does not check member references, the
//! engine copes with those on its own.

use crate::input::Record;
use crate::ledger::{
    split_equally, Amount, Expense, ExpenseCategory, ExpenseId, Group, MemberId, ParticipantSplit,
    SettlementId,
};

use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GroupError {
    #[error("group is declared more than once, ignoring {0}")]
    DuplicateGroup(String),

    #[error("member {0} is declared more than once")]
    DuplicateMember(MemberId),

    #[error("expense {0} is declared more than once")]
    DuplicateExpense(ExpenseId),

    #[error("settlement {0} is declared more than once")]
    DuplicateSettlement(SettlementId),

    #[error("shares refer to expense {0}, which is never declared")]
    UnknownExpense(ExpenseId),

    #[error("expense {0} has both explicit shares and an equal split")]
    MixedSplit(ExpenseId),

    #[error("expense {0} has no participants")]
    NoParticipants(ExpenseId),

    #[error("shares of expense {expense} add up to {shares}, not {amount}")]
    SplitMismatch {
        expense: ExpenseId,
        amount: Amount,
        shares: Amount,
    },
}

/// Assemble the group on a separate thread, streaming errors as we go.
///
/// Rows may come in any order, so expenses are only finalised once every
/// record has been received. Records that don't fit are reported and left out
/// of the group.
pub fn assemble(records: Receiver<Record>) -> (JoinHandle<Group>, Receiver<GroupError>) {
    let (error_tx, error_rx) = mpsc::channel();

    let handle = std::thread::spawn(move || {
        let mut builder = GroupBuilder::default();
        for record in records {
            builder.push(record, &error_tx);
        }
        builder.finish(&error_tx)
    });

    (handle, error_rx)
}

/// An expense whose participants aren't all known yet.
struct PendingExpense {
    id: ExpenseId,
    payer_id: MemberId,
    amount: Amount,
    category: ExpenseCategory,
    description: String,
}

#[derive(Default)]
struct Parts {
    shares: Vec<ParticipantSplit>,
    split_between: Vec<MemberId>,
}

#[derive(Default)]
struct GroupBuilder {
    group: Group,
    group_declared: bool,
    member_ids: HashSet<MemberId>,
    settlement_ids: HashSet<SettlementId>,
    expenses: Vec<PendingExpense>,
    expense_ids: HashSet<ExpenseId>,
    parts: HashMap<ExpenseId, Parts>,
}

// A closed error channel only means nobody listens to errors anymore, which
// must not stop the group from being built.
fn report(errors: &Sender<GroupError>, err: GroupError) {
    let _ = errors.send(err);
}

impl GroupBuilder {
    fn push(&mut self, record: Record, errors: &Sender<GroupError>) {
        match record {
            Record::Group { id, name } => {
                if std::mem::replace(&mut self.group_declared, true) {
                    return report(errors, GroupError::DuplicateGroup(id));
                }
                self.group.id = id;
                self.group.name = name;
            }
            Record::Member(member) => {
                if !self.member_ids.insert(member.id.clone()) {
                    return report(errors, GroupError::DuplicateMember(member.id));
                }
                self.group.add_member(member);
            }
            Record::Expense {
                id,
                payer_id,
                amount,
                category,
                description,
            } => {
                if !self.expense_ids.insert(id.clone()) {
                    return report(errors, GroupError::DuplicateExpense(id));
                }
                self.expenses.push(PendingExpense {
                    id,
                    payer_id,
                    amount,
                    category,
                    description,
                });
            }
            Record::Share {
                expense_id,
                member_id,
                share,
            } => self
                .parts
                .entry(expense_id)
                .or_default()
                .shares
                .push(ParticipantSplit::new(member_id, share)),
            Record::Split {
                expense_id,
                member_id,
            } => self
                .parts
                .entry(expense_id)
                .or_default()
                .split_between
                .push(member_id),
            Record::Settlement(settlement) => {
                if !self.settlement_ids.insert(settlement.id.clone()) {
                    return report(errors, GroupError::DuplicateSettlement(settlement.id));
                }
                self.group.add_settlement(settlement);
            }
        }
    }

    fn finish(mut self, errors: &Sender<GroupError>) -> Group {
        for pending in std::mem::take(&mut self.expenses) {
            let parts = self.parts.remove(&pending.id).unwrap_or_default();
            match finalise(pending, parts) {
                Ok(expense) => self.group.add_expense(expense),
                Err(err) => report(errors, err),
            }
        }

        // Whatever is left belongs to expenses that were never declared.
        let mut orphans: Vec<ExpenseId> = self.parts.into_keys().collect();
        orphans.sort();
        for expense_id in orphans {
            report(errors, GroupError::UnknownExpense(expense_id));
        }

        self.group
    }
}

fn finalise(pending: PendingExpense, parts: Parts) -> Result<Expense, GroupError> {
    let participants = match (parts.shares.is_empty(), parts.split_between.is_empty()) {
        (true, true) => return Err(GroupError::NoParticipants(pending.id)),
        (false, false) => return Err(GroupError::MixedSplit(pending.id)),
        (true, false) => split_equally(pending.amount, &parts.split_between),
        (false, true) => parts.shares,
    };

    let expense = Expense::new(pending.id, pending.payer_id, pending.amount, participants)
        .with_category(pending.category)
        .with_description(pending.description);

    if !expense.is_balanced() {
        return Err(GroupError::SplitMismatch {
            shares: expense.total_shares(),
            amount: expense.amount,
            expense: expense.id,
        });
    }

    Ok(expense)
}
