pub mod transaction_form;
