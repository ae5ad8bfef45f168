//! Platform-independent core of the transaction manager: the data model shared
//! with the REST backend, label tables, request construction, and the state
//! machines the frontend drives.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod labels;
pub mod model;
pub mod pagination;
pub mod table;

pub use api::{ApiRequest, ApiResponse, Method, TransactionApi, Transport};
pub use config::ClientConfig;
pub use controller::{Dialogs, RowAction, TransactionController};
pub use error::{ClientError, ClientResult, ErrorCode, Operation};
pub use form::{FormEvent, FormField, FormMode, FormState, TransactionForm};
pub use model::{DetailField, Page, Transaction, TransactionId, TransactionStatus, TransactionType};
pub use pagination::{ListEvent, ListState, Navigation, PageRequest, PaginationView};
pub use table::{RowView, TableView};
