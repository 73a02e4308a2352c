use super::{
    expense::Expense, member::Member, settlement::Settlement, simplify::SimplifiedTransaction,
    SettlementId,
};

/// Everything the engine needs to know about a group: who is in it, what they
/// spent, and what they already paid each other back.
///
/// The engine only reads a group. The mutation helpers below are for whoever
/// owns the ledger (the CSV loader, a storage layer...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
    pub settlements: Vec<Settlement>,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Replace the expense with the same id. Returns false if there was none.
    pub fn replace_expense(&mut self, expense: Expense) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => {
                *existing = expense;
                true
            }
            None => false,
        }
    }

    pub fn remove_expense(&mut self, id: &str) -> Option<Expense> {
        let position = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(position))
    }

    pub fn add_settlement(&mut self, settlement: Settlement) {
        self.settlements.push(settlement);
    }

    /// Mark a suggested payment as done.
    pub fn settle(&mut self, id: impl Into<SettlementId>, tx: &SimplifiedTransaction) {
        self.add_settlement(Settlement::from_transaction(id, tx));
    }
}
