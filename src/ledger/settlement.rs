use super::{simplify::SimplifiedTransaction, Amount, MemberId, SettlementId};

/// A payment made outside of any expense: `from_id` paid `to_id` `amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub id: SettlementId,
    pub from_id: MemberId,
    pub to_id: MemberId,
    pub amount: Amount,
}

impl Settlement {
    pub fn new(
        id: impl Into<SettlementId>,
        from_id: impl Into<MemberId>,
        to_id: impl Into<MemberId>,
        amount: Amount,
    ) -> Self {
        Self {
            id: id.into(),
            from_id: from_id.into(),
            to_id: to_id.into(),
            amount,
        }
    }

    /// Record a suggested payment as actually made.
    pub fn from_transaction(id: impl Into<SettlementId>, tx: &SimplifiedTransaction) -> Self {
        Self::new(id, tx.from.id.clone(), tx.to.id.clone(), tx.amount)
    }
}
