//! User actions as explicit commands against the transaction store.
//!
//! Every action either fully succeeds or leaves the store untouched and
//! reports an [`ActionError`].

pub mod add;
pub mod remove;
pub mod summary;

use crate::error::ActionError;
use crate::models::summary::Summary;
use crate::models::transaction::Transaction;
use crate::store::TransactionStore;
use add::TransactionForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(TransactionForm),
    /// Delete the row at the selection, `None` when nothing is selected.
    Delete(Option<usize>),
    ViewSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Transaction),
    Deleted(Transaction),
    Summary(Summary),
    Rejected(ActionError),
}

pub fn dispatch(store: &mut TransactionStore, command: Command) -> Outcome {
    match command {
        Command::Add(form) => match add::add_transaction_to_store(store, &form) {
            Ok(transaction) => Outcome::Added(transaction.clone()),
            Err(err) => Outcome::Rejected(err),
        },
        Command::Delete(selection) => match remove::remove_selected_transaction(store, selection) {
            Ok(transaction) => Outcome::Deleted(transaction),
            Err(err) => Outcome::Rejected(err),
        },
        Command::ViewSummary => Outcome::Summary(summary::summarize_transactions(store)),
    }
}
