use crate::error::ActionError;
use crate::models::summary::Summary;
use crate::models::transaction::{Transaction, TransactionType};
use rust_decimal::Decimal;

/// Ordered, in-memory collection of recorded transactions.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        kind: String,
        category: String,
        amount: Decimal,
        date: String,
    ) -> &Transaction {
        self.transactions
            .push(Transaction::new(kind, category, amount, date));
        &self.transactions[self.transactions.len() - 1]
    }

    /// Removes the record at `selection`. `None` means no row is selected.
    pub fn remove_at(&mut self, selection: Option<usize>) -> Result<Transaction, ActionError> {
        match selection {
            Some(index) if index < self.transactions.len() => Ok(self.transactions.remove(index)),
            _ => Err(ActionError::NothingSelected),
        }
    }

    /// Totals saturate at the `Decimal` bounds. Adds that would push a total
    /// out of range are refused earlier, see [`TransactionStore::accepts`].
    pub fn summarize(&self) -> Summary {
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        for transaction in &self.transactions {
            match transaction.transaction_type() {
                TransactionType::Income => {
                    total_income = total_income.saturating_add(transaction.amount())
                }
                TransactionType::Expense => {
                    total_expenses = total_expenses.saturating_add(transaction.amount())
                }
                TransactionType::Other => {}
            }
        }
        Summary::new(total_income, total_expenses)
    }

    fn checked_summary(&self) -> Option<Summary> {
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        for transaction in &self.transactions {
            match transaction.transaction_type() {
                TransactionType::Income => {
                    total_income = total_income.checked_add(transaction.amount())?
                }
                TransactionType::Expense => {
                    total_expenses = total_expenses.checked_add(transaction.amount())?
                }
                TransactionType::Other => {}
            }
        }
        Summary::checked_new(total_income, total_expenses)
    }

    /// Whether a record of `kind` and `amount` keeps every total representable.
    pub fn accepts(&self, kind: &str, amount: Decimal) -> bool {
        let Some(current) = self.checked_summary() else {
            return false;
        };
        let (income, expenses) = match TransactionType::classify(kind) {
            TransactionType::Income => match current.total_income.checked_add(amount) {
                Some(income) => (income, current.total_expenses),
                None => return false,
            },
            TransactionType::Expense => match current.total_expenses.checked_add(amount) {
                Some(expenses) => (current.total_income, expenses),
                None => return false,
            },
            TransactionType::Other => return true,
        };
        Summary::checked_new(income, expenses).is_some()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// One rendered line per record, in store order.
    pub fn lines(&self) -> Vec<String> {
        self.iter().map(|t| t.to_string()).collect()
    }
}
