pub mod header;
pub mod transaction_form_modal;
pub mod transactions;
