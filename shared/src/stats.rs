//! Aggregation over an in-memory transaction list: balance, per-type
//! totals, case-insensitive search and per-field sorting. All single-pass
//! pure functions; the statement and dashboard views are built on these.

use serde::{Deserialize, Serialize};

use crate::{Transaction, TransactionType};

/// Per-type totals plus the resulting balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStats {
    pub total_credit: f64,
    pub total_debit: f64,
    pub total_loan: f64,
    pub balance: f64,
    pub transaction_count: usize,
}

/// Balance = credits + loans - debits. A loan raises the balance while the
/// money sits in the account; repayment would be a regular debit.
pub fn calculate_balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().fold(0.0, |balance, t| match t.transaction_type {
        TransactionType::Credit | TransactionType::Loan => balance + t.amount,
        TransactionType::Debit => balance - t.amount,
    })
}

/// Compute totals per transaction type along with the balance
pub fn calculate_stats(transactions: &[Transaction]) -> TransactionStats {
    let mut stats = TransactionStats {
        total_credit: 0.0,
        total_debit: 0.0,
        total_loan: 0.0,
        balance: 0.0,
        transaction_count: transactions.len(),
    };

    for t in transactions {
        match t.transaction_type {
            TransactionType::Credit => stats.total_credit += t.amount,
            TransactionType::Debit => stats.total_debit += t.amount,
            TransactionType::Loan => stats.total_loan += t.amount,
        }
    }

    stats.balance = stats.total_credit + stats.total_loan - stats.total_debit;
    stats
}

/// Case-insensitive substring match against description and category
pub fn matches_search(transaction: &Transaction, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    transaction.description.to_lowercase().contains(&needle)
        || transaction.category.to_lowercase().contains(&needle)
}

/// Field the statement can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Date,
    Amount,
    Description,
    Category,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Date => "Data",
            SortField::Amount => "Valor",
            SortField::Description => "Descrição",
            SortField::Category => "Categoria",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow glyph for the active column header
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Sort in place by the given field and direction. Ties keep their
/// relative order (stable sort) so toggling a column is predictable.
pub fn sort_transactions(
    transactions: &mut [Transaction],
    field: SortField,
    direction: SortDirection,
) {
    transactions.sort_by(|a, b| {
        let ordering = match field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a
                .amount
                .partial_cmp(&b.amount)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortField::Description => a
                .description
                .to_lowercase()
                .cmp(&b.description.to_lowercase()),
            SortField::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: TransactionType, amount: f64, description: &str, date: &str) -> Transaction {
        Transaction {
            id: format!("transaction::{}::{}", kind.as_str(), date.len()),
            transaction_type: kind,
            amount,
            description: description.to_string(),
            category: "Outros".to_string(),
            date: date.to_string(),
        }
    }

    fn fixture() -> Vec<Transaction> {
        vec![
            tx(TransactionType::Credit, 2500.0, "Salário", "2024-01-15T10:30:00+00:00"),
            tx(TransactionType::Debit, 350.75, "Supermercado", "2024-01-14T14:22:00+00:00"),
            tx(TransactionType::Loan, 1000.0, "Empréstimo Pessoal", "2024-01-09T11:20:00+00:00"),
            tx(TransactionType::Debit, 89.90, "Conta de Luz", "2024-01-12T09:15:00+00:00"),
        ]
    }

    #[test]
    fn test_balance_is_credits_plus_loans_minus_debits() {
        let transactions = fixture();
        let balance = calculate_balance(&transactions);
        assert!((balance - (2500.0 + 1000.0 - 350.75 - 89.90)).abs() < 1e-9);
    }

    #[test]
    fn test_stats_totals() {
        let stats = calculate_stats(&fixture());
        assert!((stats.total_credit - 2500.0).abs() < 1e-9);
        assert!((stats.total_debit - 440.65).abs() < 1e-9);
        assert!((stats.total_loan - 1000.0).abs() < 1e-9);
        assert_eq!(stats.transaction_count, 4);
        assert!((stats.balance - calculate_balance(&fixture())).abs() < 1e-9);
    }

    #[test]
    fn test_empty_list_has_zero_balance() {
        assert_eq!(calculate_balance(&[]), 0.0);
        let stats = calculate_stats(&[]);
        assert_eq!(stats.transaction_count, 0);
        assert_eq!(stats.balance, 0.0);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let transactions = fixture();
        assert!(matches_search(&transactions[0], "salário"));
        assert!(matches_search(&transactions[0], "SALÁRIO"));
        assert!(matches_search(&transactions[1], "mercado"));
        assert!(!matches_search(&transactions[1], "farmácia"));
    }

    #[test]
    fn test_search_matches_category() {
        let transactions = fixture();
        assert!(matches_search(&transactions[0], "outros"));
    }

    #[test]
    fn test_blank_query_matches_everything() {
        for t in fixture() {
            assert!(matches_search(&t, ""));
            assert!(matches_search(&t, "   "));
        }
    }

    #[test]
    fn test_sort_by_amount_both_directions() {
        let mut transactions = fixture();
        sort_transactions(&mut transactions, SortField::Amount, SortDirection::Ascending);
        let amounts: Vec<f64> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![89.90, 350.75, 1000.0, 2500.0]);

        sort_transactions(&mut transactions, SortField::Amount, SortDirection::Descending);
        let amounts: Vec<f64> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![2500.0, 1000.0, 350.75, 89.90]);
    }

    #[test]
    fn test_sort_by_date_descending_shows_newest_first() {
        let mut transactions = fixture();
        sort_transactions(&mut transactions, SortField::Date, SortDirection::Descending);
        assert_eq!(transactions[0].description, "Salário");
        assert_eq!(transactions[3].description, "Empréstimo Pessoal");
    }

    #[test]
    fn test_sort_by_description_ignores_case() {
        let mut transactions = vec![
            tx(TransactionType::Debit, 1.0, "banana", "2024-01-01T00:00:00+00:00"),
            tx(TransactionType::Debit, 2.0, "Abacaxi", "2024-01-02T00:00:00+00:00"),
        ];
        sort_transactions(
            &mut transactions,
            SortField::Description,
            SortDirection::Ascending,
        );
        assert_eq!(transactions[0].description, "Abacaxi");
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }
}
