pub mod pagination;
pub mod transaction_table;

pub use pagination::Pagination;
pub use transaction_table::TransactionTable;
