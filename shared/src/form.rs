//! Modal form lifecycle for creating and editing transactions.
//!
//! The form is either closed or open in one of two modes. Closing always
//! discards whatever was typed, so the next open starts blank.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ClientError, ClientResult};
use crate::model::{DetailField, Transaction, TransactionId, TransactionStatus, TransactionType};

/// Default originator the backend expects on interest and fee records
pub const SYSTEM_INITIATOR: &str = "SYSTEM";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Raw input values, as strings, the way the form controls hold them
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    /// Hidden id input; empty for new transactions
    pub id: String,
    pub transaction_type: String,
    pub amount: String,
    pub status: String,
    pub description: String,
    pub target_account: String,
    pub original_transaction_id: String,
    pub initiated_by: String,
    /// Carried through an edit untouched
    timestamp: Option<String>,
}

impl Default for TransactionForm {
    /// Blank form; selects fall back to their first option
    fn default() -> Self {
        Self {
            id: String::new(),
            transaction_type: TransactionType::ALL[0].as_str().to_string(),
            amount: String::new(),
            status: TransactionStatus::ALL[0].as_str().to_string(),
            description: String::new(),
            target_account: String::new(),
            original_transaction_id: String::new(),
            initiated_by: String::new(),
            timestamp: None,
        }
    }
}

impl TransactionForm {
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id.to_string(),
            transaction_type: transaction.transaction_type.as_str().to_string(),
            amount: transaction.amount.to_string(),
            status: transaction.status.as_str().to_string(),
            description: transaction.description.clone().unwrap_or_default(),
            target_account: transaction.target_account.clone().unwrap_or_default(),
            original_transaction_id: transaction
                .original_transaction_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            initiated_by: transaction.initiated_by.clone().unwrap_or_default(),
            timestamp: transaction.timestamp.clone(),
        }
    }

    /// Id from the hidden input; anything that is not a number counts as a new transaction
    pub fn id(&self) -> TransactionId {
        leading_integer(&self.id).unwrap_or(0)
    }

    pub fn selected_type(&self) -> TransactionType {
        TransactionType::from(self.transaction_type.as_str())
    }

    /// Read the inputs into a transaction-shaped value
    pub fn to_transaction(&self) -> ClientResult<Transaction> {
        let amount = parse_amount(&self.amount)?;
        let mut transaction = Transaction::new(
            self.selected_type(),
            amount,
            TransactionStatus::from(self.status.as_str()),
        );
        transaction.id = self.id();
        transaction.description = non_empty(&self.description);
        transaction.target_account = non_empty(&self.target_account);
        transaction.original_transaction_id = leading_integer(&self.original_transaction_id);
        transaction.initiated_by = non_empty(&self.initiated_by);
        transaction.timestamp = self.timestamp.clone();
        Ok(transaction)
    }

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Type => {
                self.transaction_type = value;
                if self.initiated_by.trim().is_empty()
                    && self.selected_type().detail_field() == Some(DetailField::InitiatedBy)
                {
                    self.initiated_by = SYSTEM_INITIATOR.to_string();
                }
            }
            FormField::Amount => self.amount = value,
            FormField::Status => self.status = value,
            FormField::Description => self.description = value,
            FormField::TargetAccount => self.target_account = value,
            FormField::OriginalTransactionId => self.original_transaction_id = value,
            FormField::InitiatedBy => self.initiated_by = value,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Integer prefix of the input, so `"12abc"` reads as 12
fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse().ok()
}

fn parse_amount(raw: &str) -> ClientResult<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ClientError::invalid_input(format!("amount '{}' is not a number", raw)))
}

/// Editable inputs; the hidden id is not user-editable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Type,
    Amount,
    Status,
    Description,
    TargetAccount,
    OriginalTransactionId,
    InitiatedBy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Add button
    OpenCreate,
    /// A row's edit action, once the record has been fetched
    OpenEdit(Transaction),
    FieldChanged(FormField, String),
    /// Cancel, overlay click, or a successful submit
    Close,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Open {
        mode: FormMode,
        fields: TransactionForm,
    },
}

impl FormState {
    pub fn apply(&self, event: FormEvent) -> FormState {
        match event {
            FormEvent::OpenCreate => FormState::Open {
                mode: FormMode::Create,
                fields: TransactionForm::default(),
            },
            FormEvent::OpenEdit(transaction) => FormState::Open {
                mode: FormMode::Edit,
                fields: TransactionForm::from_transaction(&transaction),
            },
            FormEvent::FieldChanged(field, value) => match self {
                FormState::Open { mode, fields } => {
                    let mut fields = fields.clone();
                    fields.set(field, value);
                    FormState::Open {
                        mode: *mode,
                        fields,
                    }
                }
                FormState::Closed => FormState::Closed,
            },
            FormEvent::Close => FormState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, FormState::Open { .. })
    }

    pub fn fields(&self) -> Option<&TransactionForm> {
        match self {
            FormState::Open { fields, .. } => Some(fields),
            FormState::Closed => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormState::Open {
                mode: FormMode::Edit,
                ..
            } => "编辑交易",
            _ => "添加交易",
        }
    }
}
