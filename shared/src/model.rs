use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::ClientError;

/// Identifier assigned by the backend. Zero marks a transaction that has not been saved yet.
pub type TransactionId = i64;

/// A financial record as exchanged with `/api/transactions`.
///
/// The client only ever holds a display-local copy; the backend owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(
        default,
        deserialize_with = "null_as_zero",
        skip_serializing_if = "is_unsaved"
    )]
    pub id: TransactionId,
    #[serde(rename = "type", deserialize_with = "null_as_unrecognized")]
    pub transaction_type: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TransactionStatus,
    /// Free-form note shown nowhere in the table but kept intact across edits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Server-assigned creation time, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Destination account, required by the backend for transfers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_account: Option<String>,
    /// Transaction being refunded, required by the backend for refunds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_transaction_id: Option<TransactionId>,
    /// Originator of system-generated interest and fee records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiated_by: Option<String>,
}

impl Transaction {
    pub fn new(transaction_type: TransactionType, amount: Decimal, status: TransactionStatus) -> Self {
        Self {
            id: 0,
            transaction_type,
            amount,
            status,
            description: None,
            timestamp: None,
            target_account: None,
            original_transaction_id: None,
            initiated_by: None,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id != 0
    }
}

fn is_unsaved(id: &TransactionId) -> bool {
    *id == 0
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<TransactionId, D::Error>
where
    D: Deserializer<'de>,
{
    null_as_default(deserializer)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A stored record may have no type at all; it is shown with an empty label
fn null_as_unrecognized<'de, D>(deserializer: D) -> Result<TransactionType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TransactionType>::deserialize(deserializer)?
        .unwrap_or_else(|| TransactionType::Unrecognized(String::new())))
}

/// Kind of transaction. Values the UI has no label for are kept as `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    FeeIncome,
    InterestIncome,
    Deposit,
    Refund,
    FeeExpense,
    InterestExpense,
    Withdrawal,
    Transfer,
    Unrecognized(String),
}

impl TransactionType {
    /// Known types in the order the form offers them
    pub const ALL: [TransactionType; 8] = [
        TransactionType::FeeIncome,
        TransactionType::InterestIncome,
        TransactionType::Deposit,
        TransactionType::Refund,
        TransactionType::FeeExpense,
        TransactionType::InterestExpense,
        TransactionType::Withdrawal,
        TransactionType::Transfer,
    ];

    /// Wire value, e.g. `"DEPOSIT"`
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::FeeIncome => "FEE_INCOME",
            TransactionType::InterestIncome => "INTEREST_INCOME",
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Refund => "REFUND",
            TransactionType::FeeExpense => "FEE_EXPENSE",
            TransactionType::InterestExpense => "INTEREST_EXPENSE",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::Transfer => "TRANSFER",
            TransactionType::Unrecognized(raw) => raw,
        }
    }

    /// Extra input the backend insists on for this type, if any
    pub fn detail_field(&self) -> Option<DetailField> {
        match self {
            TransactionType::Transfer => Some(DetailField::TargetAccount),
            TransactionType::Refund => Some(DetailField::OriginalTransactionId),
            TransactionType::FeeIncome
            | TransactionType::InterestIncome
            | TransactionType::FeeExpense
            | TransactionType::InterestExpense => Some(DetailField::InitiatedBy),
            TransactionType::Deposit
            | TransactionType::Withdrawal
            | TransactionType::Unrecognized(_) => None,
        }
    }
}

impl From<String> for TransactionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "FEE_INCOME" => TransactionType::FeeIncome,
            "INTEREST_INCOME" => TransactionType::InterestIncome,
            "DEPOSIT" => TransactionType::Deposit,
            "REFUND" => TransactionType::Refund,
            "FEE_EXPENSE" => TransactionType::FeeExpense,
            "INTEREST_EXPENSE" => TransactionType::InterestExpense,
            "WITHDRAWAL" => TransactionType::Withdrawal,
            "TRANSFER" => TransactionType::Transfer,
            _ => TransactionType::Unrecognized(value),
        }
    }
}

impl From<&str> for TransactionType {
    fn from(value: &str) -> Self {
        TransactionType::from(value.to_string())
    }
}

impl From<TransactionType> for String {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing state of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
    Unrecognized(String),
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Pending,
        TransactionStatus::Completed,
        TransactionStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Cancelled => "CANCELLED",
            TransactionStatus::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => TransactionStatus::Pending,
            "COMPLETED" => TransactionStatus::Completed,
            "CANCELLED" => TransactionStatus::Cancelled,
            _ => TransactionStatus::Unrecognized(value),
        }
    }
}

impl From<&str> for TransactionStatus {
    fn from(value: &str) -> Self {
        TransactionStatus::from(value.to_string())
    }
}

impl From<TransactionStatus> for String {
    fn from(value: TransactionStatus) -> Self {
        match value {
            TransactionStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional inputs that only some transaction types need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    TargetAccount,
    OriginalTransactionId,
    InitiatedBy,
}

/// A bounded slice of the transaction list with total-count metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode a list response, insisting on a `content` array before anything else
    pub fn from_json(body: &str) -> Result<Self, ClientError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| ClientError::invalid_format(e.to_string()))?;

        if !value.get("content").map_or(false, serde_json::Value::is_array) {
            return Err(ClientError::invalid_format("Invalid data format"));
        }

        serde_json::from_value(value).map_err(|e| ClientError::invalid_format(e.to_string()))
    }
}
