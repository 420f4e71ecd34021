use crate::models::summary::Summary;
use crate::store::TransactionStore;
use tracing::debug;

pub fn summarize_transactions(store: &TransactionStore) -> Summary {
    let summary = store.summarize();
    debug!(
        transactions = store.len(),
        income = %summary.total_income,
        expenses = %summary.total_expenses,
        net = %summary.net_savings,
        "summary computed"
    );
    summary
}
