use serde::{Deserialize, Serialize};
use std::fmt;

pub mod categories;
pub mod currency;
pub mod stats;
pub mod validation;

pub use categories::*;
pub use currency::*;
pub use stats::*;
pub use validation::*;

/// Transaction ID in format: "transaction::<credit|debit|loan>::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Kind of money movement, carries the sign semantics
    pub transaction_type: TransactionType,
    /// Transaction amount, always positive
    pub amount: f64,
    /// Description of the transaction (max 256 characters)
    pub description: String,
    /// Category label, e.g. "Alimentação" or "Salário"
    pub category: String,
    /// Human-readable timestamp with timezone (RFC 3339)
    pub date: String,
}

/// Kind of money movement recorded by a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in (salary, sale, cashback)
    Credit,
    /// Money going out (purchase, bill, subscription)
    Debit,
    /// Borrowed money entering the account
    Loan,
}

impl TransactionType {
    /// Stable identifier used inside transaction IDs and serialized data
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
            TransactionType::Loan => "loan",
        }
    }

    /// Product-facing label for selectors and the statement
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Credit => "Receita",
            TransactionType::Debit => "Despesa",
            TransactionType::Loan => "Empréstimo",
        }
    }

    /// Long form shown in the form's type selector
    pub fn selector_label(&self) -> &'static str {
        match self {
            TransactionType::Credit => "Receita (Câmbio de Moeda)",
            TransactionType::Debit => "Despesa (DOC/TED)",
            TransactionType::Loan => "Empréstimo (Empréstimo e Financiamento)",
        }
    }

    /// Whether this kind of movement adds to the balance
    pub fn is_inflow(&self) -> bool {
        !matches!(self, TransactionType::Debit)
    }

    pub fn parse(s: &str) -> Option<TransactionType> {
        match s {
            "credit" => Some(TransactionType::Credit),
            "debit" => Some(TransactionType::Debit),
            "loan" => Some(TransactionType::Loan),
            _ => None,
        }
    }

    /// All kinds, in selector order
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Credit,
        TransactionType::Debit,
        TransactionType::Loan,
    ];
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payload for creating a new transaction from the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub transaction_type: TransactionType,
    /// Positive amount; the type carries the direction
    pub amount: f64,
    pub description: String,
    pub category: String,
    /// Optional date override (RFC 3339) - uses current time if not provided
    pub date: Option<String>,
}

/// Optional criteria for narrowing a transaction listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilters {
    pub transaction_type: Option<TransactionType>,
    /// Inclusive start date (RFC 3339)
    pub start_date: Option<String>,
    /// Inclusive end date (RFC 3339)
    pub end_date: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl TransactionFilters {
    /// Whether the given transaction passes every set criterion
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(kind) = self.transaction_type {
            if transaction.transaction_type != kind {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if transaction.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if transaction.amount > max {
                return false;
            }
        }
        // RFC 3339 strings with the same offset order lexicographically,
        // which holds for everything this store produces.
        if let Some(start) = &self.start_date {
            if transaction.date.as_str() < start.as_str() {
                return false;
            }
        }
        if let Some(end) = &self.end_date {
            if transaction.date.as_str() > end.as_str() {
                return false;
            }
        }
        true
    }
}

impl Transaction {
    /// Generate transaction ID from type and timestamp
    pub fn generate_id(transaction_type: TransactionType, epoch_millis: u64) -> String {
        format!("transaction::{}::{}", transaction_type.as_str(), epoch_millis)
    }

    /// Parse transaction ID to extract components
    pub fn parse_id(id: &str) -> Result<(TransactionType, u64), TransactionIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 3 || parts[0] != "transaction" {
            return Err(TransactionIdError::InvalidFormat);
        }

        let transaction_type =
            TransactionType::parse(parts[1]).ok_or(TransactionIdError::InvalidType)?;

        let epoch_millis = parts[2]
            .parse::<u64>()
            .map_err(|_| TransactionIdError::InvalidTimestamp)?;

        Ok((transaction_type, epoch_millis))
    }

    /// Extract epoch timestamp from transaction ID for sorting
    pub fn extract_timestamp(&self) -> Result<u64, TransactionIdError> {
        Self::parse_id(&self.id).map(|(_, timestamp)| timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransactionIdError {
    #[error("Invalid transaction ID format")]
    InvalidFormat,
    #[error("Invalid transaction type")]
    InvalidType,
    #[error("Invalid timestamp in transaction ID")]
    InvalidTimestamp,
}
