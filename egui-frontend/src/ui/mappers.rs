//! Mapping from domain transactions to display rows. Keeps the formatting
//! rules (dates as dd/mm/yyyy, amounts as signed BRL) out of the renderers.

use chrono::DateTime;

use shared::{format_brl, Transaction};

/// A transaction pre-formatted for the statement table
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedTransaction {
    pub id: String,
    pub type_label: &'static str,
    /// "+"/"-" direction tag shown before the type
    pub direction: &'static str,
    pub inflow: bool,
    pub description: String,
    pub category: String,
    /// Signed BRL amount, e.g. "+R$ 150,00"
    pub formatted_amount: String,
    /// dd/mm/yyyy
    pub formatted_date: String,
    pub raw_amount: f64,
}

/// Format a transaction for display in the statement
pub fn to_display_row(transaction: &Transaction) -> FormattedTransaction {
    let inflow = transaction.transaction_type.is_inflow();
    let direction = if inflow { "+" } else { "-" };
    FormattedTransaction {
        id: transaction.id.clone(),
        type_label: transaction.transaction_type.label(),
        direction,
        inflow,
        description: transaction.description.clone(),
        category: transaction.category.clone(),
        formatted_amount: format!("{}{}", direction, format_brl(transaction.amount)),
        formatted_date: format_date(&transaction.date),
        raw_amount: transaction.amount,
    }
}

/// Render an RFC 3339 timestamp as dd/mm/yyyy; unparseable input falls back
/// to the date part of the raw string.
pub fn format_date(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => rfc3339.split('T').next().unwrap_or(rfc3339).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransactionType;

    fn tx(kind: TransactionType) -> Transaction {
        Transaction {
            id: Transaction::generate_id(kind, 1702516122000),
            transaction_type: kind,
            amount: 1234.5,
            description: "Salário".to_string(),
            category: "Salário".to_string(),
            date: "2024-01-15T10:30:00-03:00".to_string(),
        }
    }

    #[test]
    fn test_credit_row_is_positive() {
        let row = to_display_row(&tx(TransactionType::Credit));
        assert!(row.inflow);
        assert_eq!(row.formatted_amount, "+R$ 1.234,50");
        assert_eq!(row.formatted_date, "15/01/2024");
        assert_eq!(row.type_label, "Receita");
    }

    #[test]
    fn test_debit_row_is_negative() {
        let row = to_display_row(&tx(TransactionType::Debit));
        assert!(!row.inflow);
        assert_eq!(row.formatted_amount, "-R$ 1.234,50");
    }

    #[test]
    fn test_loan_counts_as_inflow() {
        let row = to_display_row(&tx(TransactionType::Loan));
        assert!(row.inflow);
        assert_eq!(row.direction, "+");
    }

    #[test]
    fn test_unparseable_date_falls_back_to_date_part() {
        assert_eq!(format_date("2024-01-15Tgarbage"), "2024-01-15");
        assert_eq!(format_date("not a date"), "not a date");
    }
}
