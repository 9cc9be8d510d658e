//! Form-level validation for transaction creation and editing. Rules are
//! enforced once at submission time; the UI also re-runs them on change to
//! drive inline error messages.

use serde::{Deserialize, Serialize};

use crate::currency::parse_brl_input;
use crate::CreateTransactionRequest;

/// Limits applied to the money form
pub const MAX_DESCRIPTION_LENGTH: usize = 256;
pub const MIN_AMOUNT: f64 = 0.01;
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Receipt attachment limits
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;
pub const ALLOWED_ATTACHMENT_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "pdf"];

/// Specific validation errors for the transaction form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum FormValidationError {
    #[error("Descrição é obrigatória.")]
    EmptyDescription,
    #[error("Descrição excede {MAX_DESCRIPTION_LENGTH} caracteres ({0}).")]
    DescriptionTooLong(usize),
    #[error("Informe um valor para a transação.")]
    EmptyAmount,
    #[error("Valor inválido: {0}")]
    InvalidAmountFormat(String),
    #[error("Informe um valor válido maior que zero.")]
    AmountNotPositive,
    #[error("Valor máximo é R$ 1.000.000,00.")]
    AmountTooLarge,
    #[error("Valor com mais de duas casas decimais.")]
    AmountPrecisionTooHigh,
    #[error("Categoria é obrigatória.")]
    EmptyCategory,
    #[error("Data inválida: {0}")]
    InvalidDate(String),
    #[error("Data não pode estar no futuro.")]
    DateInFuture,
    #[error("Tipo de arquivo não suportado: {0}")]
    UnsupportedAttachmentType(String),
    #[error("Arquivo excede o limite de 5 MB.")]
    AttachmentTooLarge(u64),
}

/// Validation outcome: the error list plus the cleaned amount when the
/// amount field parsed successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: Vec<FormValidationError>,
    pub cleaned_amount: Option<f64>,
}

impl FormValidation {
    /// First error concerning the given field, for inline display
    pub fn error_for(&self, field: FormField) -> Option<&FormValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }
}

/// Which form field an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
    Category,
    Date,
    Attachment,
}

impl FormValidationError {
    pub fn field(&self) -> FormField {
        match self {
            FormValidationError::EmptyDescription
            | FormValidationError::DescriptionTooLong(_) => FormField::Description,
            FormValidationError::EmptyAmount
            | FormValidationError::InvalidAmountFormat(_)
            | FormValidationError::AmountNotPositive
            | FormValidationError::AmountTooLarge
            | FormValidationError::AmountPrecisionTooHigh => FormField::Amount,
            FormValidationError::EmptyCategory => FormField::Category,
            FormValidationError::InvalidDate(_) | FormValidationError::DateInFuture => {
                FormField::Date
            }
            FormValidationError::UnsupportedAttachmentType(_)
            | FormValidationError::AttachmentTooLarge(_) => FormField::Attachment,
        }
    }
}

/// Validate the raw form fields. `amount_input` is the masked text from the
/// amount field; `date` is an optional YYYY-MM-DD override compared against
/// `today` so callers (and tests) control the clock.
pub fn validate_transaction_form(
    description: &str,
    amount_input: &str,
    category: &str,
    date: Option<&str>,
    today: chrono::NaiveDate,
) -> FormValidation {
    let mut errors = Vec::new();
    let mut cleaned_amount = None;

    let trimmed = description.trim();
    if trimmed.is_empty() {
        errors.push(FormValidationError::EmptyDescription);
    } else if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
        errors.push(FormValidationError::DescriptionTooLong(trimmed.chars().count()));
    }

    if amount_input.trim().is_empty() {
        errors.push(FormValidationError::EmptyAmount);
    } else {
        match parse_brl_input(amount_input) {
            None => errors.push(FormValidationError::InvalidAmountFormat(
                amount_input.to_string(),
            )),
            Some(value) if value < MIN_AMOUNT => {
                errors.push(FormValidationError::AmountNotPositive)
            }
            Some(value) if value > MAX_AMOUNT => errors.push(FormValidationError::AmountTooLarge),
            Some(value) => {
                // The mask only ever produces two decimals; a hand-typed
                // value may not.
                if (value * 100.0).fract().abs() > 1e-6 {
                    errors.push(FormValidationError::AmountPrecisionTooHigh);
                } else {
                    cleaned_amount = Some(value);
                }
            }
        }
    }

    if category.trim().is_empty() {
        errors.push(FormValidationError::EmptyCategory);
    }

    if let Some(raw) = date {
        match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(parsed) => {
                if parsed > today {
                    errors.push(FormValidationError::DateInFuture);
                }
            }
            Err(_) => errors.push(FormValidationError::InvalidDate(raw.to_string())),
        }
    }

    FormValidation {
        is_valid: errors.is_empty(),
        errors,
        cleaned_amount,
    }
}

/// Validate an already-parsed request, used by the store as the final gate
pub fn validate_create_request(
    request: &CreateTransactionRequest,
    today: chrono::NaiveDate,
) -> FormValidation {
    let mut errors = Vec::new();

    let trimmed = request.description.trim();
    if trimmed.is_empty() {
        errors.push(FormValidationError::EmptyDescription);
    } else if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
        errors.push(FormValidationError::DescriptionTooLong(trimmed.chars().count()));
    }

    if request.amount < MIN_AMOUNT {
        errors.push(FormValidationError::AmountNotPositive);
    } else if request.amount > MAX_AMOUNT {
        errors.push(FormValidationError::AmountTooLarge);
    }

    if request.category.trim().is_empty() {
        errors.push(FormValidationError::EmptyCategory);
    }

    if let Some(raw) = &request.date {
        let day_part = raw.split('T').next().unwrap_or(raw);
        match chrono::NaiveDate::parse_from_str(day_part, "%Y-%m-%d") {
            Ok(parsed) => {
                if parsed > today {
                    errors.push(FormValidationError::DateInFuture);
                }
            }
            Err(_) => errors.push(FormValidationError::InvalidDate(raw.clone())),
        }
    }

    FormValidation {
        is_valid: errors.is_empty(),
        errors,
        cleaned_amount: Some(request.amount),
    }
}

/// Validate a receipt attachment by file name and size
pub fn validate_attachment(file_name: &str, size_bytes: u64) -> Result<(), FormValidationError> {
    let extension = file_name
        .rsplit('.')
        .next()
        .filter(|ext| !ext.is_empty() && *ext != file_name)
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    if !ALLOWED_ATTACHMENT_EXTENSIONS.contains(&extension.as_str()) {
        return Err(FormValidationError::UnsupportedAttachmentType(
            if extension.is_empty() {
                file_name.to_string()
            } else {
                extension
            },
        ));
    }
    if size_bytes > MAX_ATTACHMENT_BYTES {
        return Err(FormValidationError::AttachmentTooLarge(size_bytes));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransactionType;

    fn today() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_valid_form_passes() {
        let result =
            validate_transaction_form("Supermercado", "1.234,56", "Alimentação", None, today());
        assert!(result.is_valid);
        assert_eq!(result.cleaned_amount, Some(1234.56));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_empty_description_rejected() {
        let result = validate_transaction_form("   ", "10,00", "Outros", None, today());
        assert!(!result.is_valid);
        assert_eq!(
            result.error_for(FormField::Description),
            Some(&FormValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_description_over_limit_rejected() {
        let long = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        let result = validate_transaction_form(&long, "10,00", "Outros", None, today());
        assert!(!result.is_valid);
        assert!(matches!(
            result.error_for(FormField::Description),
            Some(FormValidationError::DescriptionTooLong(_))
        ));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let result = validate_transaction_form("Teste", "0,00", "Outros", None, today());
        assert!(!result.is_valid);
        assert_eq!(
            result.error_for(FormField::Amount),
            Some(&FormValidationError::AmountNotPositive)
        );
        assert_eq!(result.cleaned_amount, None);
    }

    #[test]
    fn test_empty_amount_rejected() {
        let result = validate_transaction_form("Teste", "", "Outros", None, today());
        assert_eq!(
            result.error_for(FormField::Amount),
            Some(&FormValidationError::EmptyAmount)
        );
    }

    #[test]
    fn test_amount_over_limit_rejected() {
        let result =
            validate_transaction_form("Teste", "1.000.000,01", "Outros", None, today());
        assert_eq!(
            result.error_for(FormField::Amount),
            Some(&FormValidationError::AmountTooLarge)
        );
    }

    #[test]
    fn test_empty_category_rejected() {
        let result = validate_transaction_form("Teste", "10,00", "", None, today());
        assert_eq!(
            result.error_for(FormField::Category),
            Some(&FormValidationError::EmptyCategory)
        );
    }

    #[test]
    fn test_future_date_rejected() {
        let result =
            validate_transaction_form("Teste", "10,00", "Outros", Some("2024-06-16"), today());
        assert_eq!(
            result.error_for(FormField::Date),
            Some(&FormValidationError::DateInFuture)
        );

        let result =
            validate_transaction_form("Teste", "10,00", "Outros", Some("2024-06-15"), today());
        assert!(result.is_valid);
    }

    #[test]
    fn test_malformed_date_rejected() {
        let result =
            validate_transaction_form("Teste", "10,00", "Outros", Some("15/06/2024"), today());
        assert!(matches!(
            result.error_for(FormField::Date),
            Some(FormValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let result = validate_transaction_form("", "", "", None, today());
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_validate_create_request() {
        let request = CreateTransactionRequest {
            transaction_type: TransactionType::Debit,
            amount: 45.5,
            description: "Uber".to_string(),
            category: "Transporte".to_string(),
            date: None,
        };
        assert!(validate_create_request(&request, today()).is_valid);

        let bad = CreateTransactionRequest {
            amount: 0.0,
            ..request
        };
        assert!(!validate_create_request(&bad, today()).is_valid);
    }

    #[test]
    fn test_attachment_type_checked() {
        assert!(validate_attachment("recibo.pdf", 1024).is_ok());
        assert!(validate_attachment("foto.JPG", 1024).is_ok());
        assert!(matches!(
            validate_attachment("planilha.xlsx", 1024),
            Err(FormValidationError::UnsupportedAttachmentType(_))
        ));
        assert!(matches!(
            validate_attachment("sem_extensao", 1024),
            Err(FormValidationError::UnsupportedAttachmentType(_))
        ));
    }

    #[test]
    fn test_attachment_size_checked() {
        assert!(validate_attachment("recibo.png", MAX_ATTACHMENT_BYTES).is_ok());
        assert!(matches!(
            validate_attachment("recibo.png", MAX_ATTACHMENT_BYTES + 1),
            Err(FormValidationError::AttachmentTooLarge(_))
        ));
    }
}
