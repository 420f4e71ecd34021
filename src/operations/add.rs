use crate::error::ActionError;
use crate::models::transaction::Transaction;
use crate::store::TransactionStore;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::info;

// Syntactic check only: day 00-31 and month 01-12, no calendar validation.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-2][0-9]|3[0-1])-(0[1-9]|1[0-2])-([0-9]{4})$")
        .unwrap_or_else(|e| panic!("invalid date pattern: {e}"))
});

// Same shape a plain float literal has: optional sign, digits with an
// optional fraction, optional exponent. No separators, no NaN or infinity.
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .unwrap_or_else(|e| panic!("invalid amount pattern: {e}"))
});

/// Raw text of the four input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub date: String,
}

/// A validated form, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: String,
    pub category: String,
    pub amount: Decimal,
    pub date: String,
}

pub fn create_transaction(form: &TransactionForm) -> Result<NewTransaction, ActionError> {
    // Amount is checked first, so it wins when both fields are bad.
    let amount = parse_amount(&form.amount)?;

    if !is_valid_date(&form.date) {
        return Err(ActionError::InvalidDate);
    }

    Ok(NewTransaction {
        kind: form.kind.clone(),
        category: form.category.clone(),
        amount,
        date: form.date.clone(),
    })
}

pub fn add_transaction_to_store<'a>(
    store: &'a mut TransactionStore,
    form: &TransactionForm,
) -> Result<&'a Transaction, ActionError> {
    let new = create_transaction(form)?;
    if !store.accepts(&new.kind, new.amount) {
        return Err(ActionError::TotalOutOfRange);
    }
    let transaction = store.add(new.kind, new.category, new.amount, new.date);
    info!(
        kind = transaction.kind(),
        category = transaction.category(),
        amount = %transaction.amount(),
        date = transaction.date(),
        "transaction added"
    );
    Ok(transaction)
}

/// Parses a numeric amount. Values outside the `Decimal` range (beyond
/// about 7.9e28) are rejected as non-numeric.
pub fn parse_amount(input: &str) -> Result<Decimal, ActionError> {
    let trimmed = input.trim();
    if !AMOUNT_PATTERN.is_match(trimmed) {
        return Err(ActionError::InvalidAmount);
    }
    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };
    parsed.map_err(|_| ActionError::InvalidAmount)
}

pub fn is_valid_date(date: &str) -> bool {
    DATE_PATTERN.is_match(date)
}
