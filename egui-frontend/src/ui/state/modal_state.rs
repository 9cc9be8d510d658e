//! # Modal State Module
//!
//! State for the statement's edit and delete dialogs. Each modal owns its
//! target transaction so closing the dialog drops everything in one place.

use shared::{
    format_amount_input, validate_transaction_form, FormField, FormValidation, Transaction,
};

/// Delete confirmation dialog target
#[derive(Debug, Clone)]
pub struct DeleteConfirmState {
    pub transaction: Transaction,
    /// Guards against the opening click registering as a backdrop click
    pub just_opened: bool,
}

impl DeleteConfirmState {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction,
            just_opened: true,
        }
    }
}

/// Edit dialog: editable copies of the target's fields plus validation
#[derive(Debug, Clone)]
pub struct EditFormState {
    pub transaction_id: String,
    pub description: String,
    /// Masked amount text, pre-filled from the current amount
    pub amount_input: String,
    pub category: String,
    pub validation: Option<FormValidation>,
    pub just_opened: bool,
}

impl EditFormState {
    pub fn new(transaction: &Transaction) -> Self {
        let cents = (transaction.amount * 100.0).round() as u64;
        Self {
            transaction_id: transaction.id.clone(),
            description: transaction.description.clone(),
            amount_input: format_amount_input(&cents.to_string()),
            category: transaction.category.clone(),
            validation: None,
            just_opened: true,
        }
    }

    /// Re-apply the currency mask after an edit
    pub fn on_amount_changed(&mut self) {
        self.amount_input = format_amount_input(&self.amount_input);
    }

    /// Validate the editable fields (date is not editable here)
    pub fn validate(&mut self, today: chrono::NaiveDate) -> bool {
        let result = validate_transaction_form(
            &self.description,
            &self.amount_input,
            &self.category,
            None,
            today,
        );
        let valid = result.is_valid;
        self.validation = Some(result);
        valid
    }

    pub fn field_error(&self, field: FormField) -> Option<String> {
        self.validation
            .as_ref()
            .and_then(|v| v.error_for(field))
            .map(|e| e.to_string())
    }

    /// Cleaned amount from the last passing validation
    pub fn cleaned_amount(&self) -> Option<f64> {
        self.validation.as_ref().and_then(|v| v.cleaned_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransactionType;

    fn transaction() -> Transaction {
        Transaction {
            id: "transaction::debit::1702516122000".to_string(),
            transaction_type: TransactionType::Debit,
            amount: 67.8,
            description: "Restaurante - Jantar".to_string(),
            category: "Alimentação".to_string(),
            date: "2024-01-03T19:45:00+00:00".to_string(),
        }
    }

    fn today() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_edit_form_prefills_masked_amount() {
        let form = EditFormState::new(&transaction());
        assert_eq!(form.amount_input, "67,80");
        assert_eq!(form.description, "Restaurante - Jantar");
    }

    #[test]
    fn test_edit_form_validates_changes() {
        let mut form = EditFormState::new(&transaction());
        form.amount_input = "8000".to_string();
        form.on_amount_changed();
        assert_eq!(form.amount_input, "80,00");
        assert!(form.validate(today()));
        assert_eq!(form.cleaned_amount(), Some(80.0));

        form.description.clear();
        assert!(!form.validate(today()));
        assert!(form.field_error(FormField::Description).is_some());
    }
}
