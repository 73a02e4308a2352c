use super::{Amount, ExpenseId, MemberId};

use serde::Deserialize;

/// What an expense was for. Only used for display; the engine ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Accommodation,
    Groceries,
    Utilities,
    Entertainment,
    #[default]
    Other,
}

/// One member's portion of an expense, in minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSplit {
    pub member_id: MemberId,
    pub share: Amount,
}

impl ParticipantSplit {
    pub fn new(member_id: impl Into<MemberId>, share: Amount) -> Self {
        Self {
            member_id: member_id.into(),
            share,
        }
    }
}

/// Something a member paid for on behalf of (some of) the group.
///
/// The shares are expected to add up to `amount`. The engine does not rely on
/// it: a mismatch shows up as a group whose balances don't sum to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    pub payer_id: MemberId,
    pub amount: Amount,
    pub participants: Vec<ParticipantSplit>,
    pub description: String,
    pub category: ExpenseCategory,
}

impl Expense {
    pub fn new(
        id: impl Into<ExpenseId>,
        payer_id: impl Into<MemberId>,
        amount: Amount,
        participants: Vec<ParticipantSplit>,
    ) -> Self {
        Self {
            id: id.into(),
            payer_id: payer_id.into(),
            amount,
            participants,
            description: String::new(),
            category: ExpenseCategory::default(),
        }
    }

    /// Build an expense shared equally between `participants`.
    pub fn split_equally(
        id: impl Into<ExpenseId>,
        payer_id: impl Into<MemberId>,
        amount: Amount,
        participants: &[MemberId],
    ) -> Self {
        Self::new(id, payer_id, amount, split_equally(amount, participants))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: ExpenseCategory) -> Self {
        self.category = category;
        self
    }

    /// Sum of all participants' shares.
    pub fn total_shares(&self) -> Amount {
        self.participants.iter().map(|p| p.share).sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.total_shares() == self.amount
    }
}

/// Split `amount` into one share per participant, in the given order.
///
/// Every participant gets `amount / n` rounded half-up. Whatever that rounding
/// gained or lost is handed back one minor unit at a time to the first
/// participants, so the shares always add up to `amount`.
pub fn split_equally(amount: Amount, participants: &[MemberId]) -> Vec<ParticipantSplit> {
    if participants.is_empty() {
        return Vec::new();
    }

    let count = participants.len() as Amount;
    let base = (2 * amount + count).div_euclid(2 * count);
    let mut remainder = amount - base * count;

    participants
        .iter()
        .map(|member_id| {
            let adjustment = remainder.signum();
            remainder -= adjustment;
            ParticipantSplit::new(member_id.clone(), base + adjustment)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<MemberId> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_split_equally() {
        for (amount, participants, want) in vec![
            (300, ids(&["a", "b", "c"]), vec![100, 100, 100]),
            (1000, ids(&["a", "b", "c"]), vec![334, 333, 333]),
            (200, ids(&["a", "b", "c"]), vec![66, 67, 67]),
            (101, ids(&["a", "b"]), vec![50, 51]),
            (1, ids(&["a", "b", "c"]), vec![1, 0, 0]),
            (40000, ids(&["a", "b", "c", "d"]), vec![10000, 10000, 10000, 10000]),
            (7, ids(&["a"]), vec![7]),
        ] {
            let got: Vec<Amount> = split_equally(amount, &participants)
                .into_iter()
                .map(|split| split.share)
                .collect();
            assert_eq!(want, got, "splitting {} over {:?}", amount, participants);
            assert_eq!(amount, got.iter().sum::<Amount>());
        }
    }

    #[test]
    fn test_split_equally_keeps_participant_order() {
        let got = split_equally(10, &ids(&["c", "a", "b"]));
        let order: Vec<&str> = got.iter().map(|s| s.member_id.as_str()).collect();
        assert_eq!(vec!["c", "a", "b"], order);
    }

    #[test]
    fn test_split_equally_no_participants() {
        assert_eq!(Vec::<ParticipantSplit>::new(), split_equally(500, &[]));
    }

    #[test]
    fn test_is_balanced() {
        let expense = Expense::split_equally("e1", "a", 1000, &ids(&["a", "b", "c"]));
        assert!(expense.is_balanced());

        let expense = Expense::new("e2", "a", 1000, vec![ParticipantSplit::new("b", 900)]);
        assert!(!expense.is_balanced());
        assert_eq!(900, expense.total_shares());
    }
}
