use rust_decimal::RoundingStrategy;

use crate::model::{Transaction, TransactionId};

pub const EMPTY_MESSAGE: &str = "暂无交易记录";

/// Number of table columns: id, type, amount, status, actions
pub const COLUMN_COUNT: u32 = 5;

/// One display row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// `None` for records without a backend id; such rows get no action buttons
    pub id: Option<TransactionId>,
    pub id_text: String,
    pub type_label: String,
    pub amount: String,
    pub status_label: String,
}

impl RowView {
    pub fn from_transaction(transaction: &Transaction) -> Self {
        let amount = transaction
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self {
            id: transaction.is_saved().then_some(transaction.id),
            id_text: transaction.id.to_string(),
            type_label: transaction.transaction_type.label().to_string(),
            amount: format!("{:.2}", amount),
            status_label: transaction.status.label().to_string(),
        }
    }
}

/// Body of the transactions table
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    Placeholder { message: &'static str, colspan: u32 },
    Rows(Vec<RowView>),
}

impl TableView {
    pub fn build(transactions: &[Transaction]) -> Self {
        if transactions.is_empty() {
            return TableView::Placeholder {
                message: EMPTY_MESSAGE,
                colspan: COLUMN_COUNT,
            };
        }
        TableView::Rows(transactions.iter().map(RowView::from_transaction).collect())
    }

    pub fn row_count(&self) -> usize {
        match self {
            TableView::Placeholder { .. } => 1,
            TableView::Rows(rows) => rows.len(),
        }
    }
}
