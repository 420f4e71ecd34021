use crate::error::ActionError;
use crate::models::transaction::Transaction;
use crate::store::TransactionStore;
use tracing::info;

pub fn remove_selected_transaction(
    store: &mut TransactionStore,
    selection: Option<usize>,
) -> Result<Transaction, ActionError> {
    let removed = store.remove_at(selection)?;
    info!(line = %removed, remaining = store.len(), "transaction removed");
    Ok(removed)
}
