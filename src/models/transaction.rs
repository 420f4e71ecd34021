use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
    Other,
}

impl TransactionType {
    /// Classifies free-text type input. Anything other than "income" or
    /// "expense" (ignoring ASCII case) is kept as `Other`.
    pub fn classify(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("income") {
            TransactionType::Income
        } else if raw.eq_ignore_ascii_case("expense") {
            TransactionType::Expense
        } else {
            TransactionType::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: String,
    category: String,
    amount: Decimal,
    date: String,
}

impl Transaction {
    pub fn new(kind: String, category: String, amount: Decimal, date: String) -> Self {
        Self {
            kind,
            category,
            amount,
            date,
        }
    }

    /// The type exactly as it was entered.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn transaction_type(&self) -> TransactionType {
        TransactionType::classify(&self.kind)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - ₹{} on {}",
            self.kind, self.category, self.amount, self.date
        )
    }
}
