pub mod use_transactions;
