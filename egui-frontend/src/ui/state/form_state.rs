//! # Form State Module
//!
//! State behind the new-transaction page: raw field values, the currency
//! input mask, category autocomplete suggestions, the optional receipt
//! attachment and the validation results driving inline errors.

use chrono::NaiveDate;

use shared::{
    format_amount_input, suggestions, validate_attachment, validate_transaction_form,
    CreateTransactionRequest, FormField, FormValidation, FormValidationError, TransactionType,
};

/// A receipt file picked through the native dialog
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Debug)]
pub struct TransactionFormState {
    pub transaction_type: TransactionType,
    /// Masked amount text ("1.234,56")
    pub amount_input: String,
    pub description: String,
    pub category_input: String,
    /// Autocomplete entries for the current category input
    pub category_suggestions: Vec<&'static str>,
    /// Optional date override; None means "now"
    pub date: Option<NaiveDate>,
    pub attachment: Option<Attachment>,
    pub attachment_error: Option<FormValidationError>,
    /// Result of the last validation pass
    pub validation: Option<FormValidation>,
    /// True while the simulated submission is in flight
    pub is_submitting: bool,
}

impl TransactionFormState {
    pub fn new() -> Self {
        Self {
            transaction_type: TransactionType::Credit,
            amount_input: String::new(),
            description: String::new(),
            category_input: String::new(),
            category_suggestions: Vec::new(),
            date: None,
            attachment: None,
            attachment_error: None,
            validation: None,
            is_submitting: false,
        }
    }

    /// Re-apply the currency mask after an edit to the amount field
    pub fn on_amount_changed(&mut self) {
        self.amount_input = format_amount_input(&self.amount_input);
    }

    /// Refresh autocomplete suggestions after an edit to the category field
    pub fn on_category_changed(&mut self) {
        self.category_suggestions = suggestions(&self.category_input);
    }

    /// Fill the category from a clicked suggestion and close the dropdown
    pub fn pick_suggestion(&mut self, category: &'static str) {
        self.category_input = category.to_string();
        self.category_suggestions.clear();
    }

    /// Record a picked file, validating its type and size
    pub fn set_attachment(&mut self, file_name: String, size_bytes: u64) {
        match validate_attachment(&file_name, size_bytes) {
            Ok(()) => {
                self.attachment = Some(Attachment {
                    file_name,
                    size_bytes,
                });
                self.attachment_error = None;
            }
            Err(error) => {
                self.attachment = None;
                self.attachment_error = Some(error);
            }
        }
    }

    /// Run the full validation pass against the given "today"
    pub fn validate(&mut self, today: NaiveDate) -> bool {
        let date_string = self.date.map(|d| d.format("%Y-%m-%d").to_string());
        let result = validate_transaction_form(
            &self.description,
            &self.amount_input,
            &self.category_input,
            date_string.as_deref(),
            today,
        );
        let valid = result.is_valid && self.attachment_error.is_none();
        self.validation = Some(result);
        valid
    }

    /// Inline error text for one field, if the last validation flagged it
    pub fn field_error(&self, field: FormField) -> Option<String> {
        if field == FormField::Attachment {
            return self.attachment_error.as_ref().map(|e| e.to_string());
        }
        self.validation
            .as_ref()
            .and_then(|v| v.error_for(field))
            .map(|e| e.to_string())
    }

    /// Build the request after a passing validation
    pub fn to_request(&self) -> Option<CreateTransactionRequest> {
        let validation = self.validation.as_ref()?;
        if !validation.is_valid {
            return None;
        }
        let amount = validation.cleaned_amount?;
        Some(CreateTransactionRequest {
            transaction_type: self.transaction_type,
            amount,
            description: self.description.trim().to_string(),
            category: self.category_input.trim().to_string(),
            date: self
                .date
                .map(|d| format!("{}T12:00:00+00:00", d.format("%Y-%m-%d"))),
        })
    }

    /// Reset every field after a successful submission
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled() -> TransactionFormState {
        let mut form = TransactionFormState::new();
        form.transaction_type = TransactionType::Debit;
        form.description = "Supermercado".to_string();
        form.amount_input = "35075".to_string();
        form.on_amount_changed();
        form.category_input = "Alimentação".to_string();
        form
    }

    #[test]
    fn test_amount_mask_applied_on_change() {
        let form = filled();
        assert_eq!(form.amount_input, "350,75");
    }

    #[test]
    fn test_valid_form_produces_request() {
        let mut form = filled();
        assert!(form.validate(today()));

        let request = form.to_request().unwrap();
        assert_eq!(request.transaction_type, TransactionType::Debit);
        assert_eq!(request.amount, 350.75);
        assert_eq!(request.description, "Supermercado");
        assert_eq!(request.date, None);
    }

    #[test]
    fn test_invalid_form_produces_no_request() {
        let mut form = filled();
        form.description.clear();
        assert!(!form.validate(today()));
        assert!(form.to_request().is_none());
        assert!(form.field_error(FormField::Description).is_some());
    }

    #[test]
    fn test_future_date_fails_validation() {
        let mut form = filled();
        form.date = NaiveDate::from_ymd_opt(2024, 6, 16);
        assert!(!form.validate(today()));
        assert!(form.field_error(FormField::Date).is_some());
    }

    #[test]
    fn test_date_is_carried_into_request() {
        let mut form = filled();
        form.date = NaiveDate::from_ymd_opt(2024, 6, 10);
        assert!(form.validate(today()));
        assert_eq!(
            form.to_request().unwrap().date.as_deref(),
            Some("2024-06-10T12:00:00+00:00")
        );
    }

    #[test]
    fn test_category_suggestions_follow_input() {
        let mut form = TransactionFormState::new();
        form.category_input = "trans".to_string();
        form.on_category_changed();
        assert_eq!(form.category_suggestions, vec!["Transporte"]);

        form.pick_suggestion("Transporte");
        assert_eq!(form.category_input, "Transporte");
        assert!(form.category_suggestions.is_empty());
    }

    #[test]
    fn test_attachment_validation() {
        let mut form = TransactionFormState::new();
        form.set_attachment("recibo.pdf".to_string(), 1024);
        assert!(form.attachment.is_some());
        assert!(form.attachment_error.is_none());

        form.set_attachment("virus.exe".to_string(), 1024);
        assert!(form.attachment.is_none());
        assert!(form.field_error(FormField::Attachment).is_some());
    }

    #[test]
    fn test_attachment_error_blocks_submission() {
        let mut form = filled();
        form.set_attachment("planilha.xlsx".to_string(), 10);
        assert!(!form.validate(today()));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = filled();
        form.set_attachment("recibo.png".to_string(), 10);
        form.validate(today());
        form.clear();
        assert!(form.description.is_empty());
        assert!(form.amount_input.is_empty());
        assert!(form.attachment.is_none());
        assert!(form.validation.is_none());
        assert_eq!(form.transaction_type, TransactionType::Credit);
    }
}
