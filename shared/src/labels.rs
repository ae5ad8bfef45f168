//! Display labels for transaction types and statuses.
//!
//! Both tables are exhaustive matches, so a new variant will not compile until it
//! has a label. Values the client does not know are shown as their raw wire value.

use crate::model::{TransactionStatus, TransactionType};

impl TransactionType {
    pub fn label(&self) -> &str {
        match self {
            TransactionType::FeeIncome => "费用收入",
            TransactionType::InterestIncome => "利息收入",
            TransactionType::Deposit => "存款",
            TransactionType::Refund => "退款",
            TransactionType::FeeExpense => "费用支出",
            TransactionType::InterestExpense => "利息支出",
            TransactionType::Withdrawal => "取款",
            TransactionType::Transfer => "转账",
            TransactionType::Unrecognized(raw) => raw,
        }
    }
}

impl TransactionStatus {
    pub fn label(&self) -> &str {
        match self {
            TransactionStatus::Pending => "待处理",
            TransactionStatus::Completed => "已完成",
            TransactionStatus::Cancelled => "已取消",
            TransactionStatus::Unrecognized(raw) => raw,
        }
    }
}
