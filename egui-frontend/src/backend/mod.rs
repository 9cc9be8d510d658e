//! # Mock Backend
//!
//! In-memory data access for the app. Holds the transaction list, applies
//! validation on writes, and exposes the aggregation the dashboard and
//! statement need. Everything lives in this process: data is seeded at
//! startup and discarded on exit.
//!
//! The artificial network delay is modeled by `SIMULATED_LATENCY`: callers
//! queue a pending operation and complete it on the first frame past the
//! deadline (see `ui::components::data_loading`). The backend itself is
//! synchronous.

use anyhow::{anyhow, Result};
use chrono::{Duration as ChronoDuration, Local};
use log::info;
use std::time::Duration;

use shared::{
    calculate_balance, calculate_stats, validate_create_request, CreateTransactionRequest,
    Transaction, TransactionFilters, TransactionStats, TransactionType,
};

/// Fixed artificial delay standing in for a network round trip
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(800);

/// Fields that can change when editing an existing transaction
#[derive(Debug, Clone)]
pub struct UpdateTransactionRequest {
    pub description: String,
    pub amount: f64,
    pub category: String,
}

pub struct Backend {
    transactions: Vec<Transaction>,
    /// Last id timestamp handed out, to keep ids unique within a millisecond
    last_id_millis: u64,
}

impl Backend {
    /// Create a backend seeded with representative account activity
    pub fn new() -> Result<Self> {
        let mut backend = Self {
            transactions: Vec::new(),
            last_id_millis: 0,
        };
        backend.seed_mock_data();
        info!(
            "Mock backend ready with {} seeded transactions",
            backend.transactions.len()
        );
        Ok(backend)
    }

    /// List transactions matching the filters, newest first
    pub fn list_transactions(&self, filters: &TransactionFilters) -> Result<Vec<Transaction>> {
        let mut result: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| filters.matches(t))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(result)
    }

    /// Validate and insert a new transaction, returning the stored record
    pub fn create_transaction(&mut self, request: CreateTransactionRequest) -> Result<Transaction> {
        let today = Local::now().date_naive();
        let validation = validate_create_request(&request, today);
        if let Some(error) = validation.errors.first() {
            return Err(anyhow!("{}", error));
        }

        let millis = self.next_id_millis();
        let date = request
            .date
            .unwrap_or_else(|| Local::now().to_rfc3339());

        let transaction = Transaction {
            id: Transaction::generate_id(request.transaction_type, millis),
            transaction_type: request.transaction_type,
            amount: request.amount,
            description: request.description.trim().to_string(),
            category: request.category.trim().to_string(),
            date,
        };

        self.transactions.push(transaction.clone());
        info!("Created transaction {}", transaction.id);
        Ok(transaction)
    }

    /// Replace the editable fields of an existing transaction
    pub fn update_transaction(
        &mut self,
        id: &str,
        update: UpdateTransactionRequest,
    ) -> Result<Transaction> {
        let transaction = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| anyhow!("Transação não encontrada: {}", id))?;

        transaction.description = update.description.trim().to_string();
        transaction.amount = update.amount;
        transaction.category = update.category.trim().to_string();
        info!("Updated transaction {}", id);
        Ok(transaction.clone())
    }

    /// Remove a transaction by id
    pub fn delete_transaction(&mut self, id: &str) -> Result<()> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            return Err(anyhow!("Transação não encontrada: {}", id));
        }
        info!("Deleted transaction {}", id);
        Ok(())
    }

    /// Current balance over the whole ledger
    pub fn balance(&self) -> f64 {
        calculate_balance(&self.transactions)
    }

    /// Totals per type for the given filters
    pub fn stats(&self, filters: &TransactionFilters) -> Result<TransactionStats> {
        let matching: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| filters.matches(t))
            .cloned()
            .collect();
        Ok(calculate_stats(&matching))
    }

    fn next_id_millis(&mut self) -> u64 {
        let now = Local::now().timestamp_millis().max(0) as u64;
        let millis = now.max(self.last_id_millis + 1);
        self.last_id_millis = millis;
        millis
    }

    fn seed_mock_data(&mut self) {
        // Activity spread over the last month so the dashboard chart and
        // statement have something to show on first launch.
        let seed: [(TransactionType, f64, &str, &str, i64); 15] = [
            (TransactionType::Credit, 2500.00, "Salário - Empresa XYZ", "Salário", 1),
            (TransactionType::Debit, 350.75, "Supermercado - Compras do mês", "Alimentação", 2),
            (TransactionType::Credit, 150.00, "Freelance - Projeto Web", "Investimento", 3),
            (TransactionType::Debit, 89.90, "Conta de Luz", "Moradia", 4),
            (TransactionType::Debit, 45.50, "Uber - Corrida centro", "Transporte", 5),
            (TransactionType::Credit, 75.00, "Cashback - Cartão de Crédito", "Outros", 7),
            (TransactionType::Loan, 1000.00, "Empréstimo Pessoal - Banco ABC", "Outros", 9),
            (TransactionType::Debit, 120.00, "Academia - Mensalidade", "Saúde", 10),
            (TransactionType::Credit, 300.00, "Venda - Produto Online", "Investimento", 12),
            (TransactionType::Debit, 25.90, "Netflix - Assinatura Mensal", "Lazer", 14),
            (TransactionType::Debit, 180.00, "Farmácia - Medicamentos", "Saúde", 17),
            (TransactionType::Credit, 500.00, "Dividendos - Investimentos", "Investimento", 20),
            (TransactionType::Debit, 67.80, "Restaurante - Jantar", "Alimentação", 22),
            (TransactionType::Debit, 39.99, "Spotify - Assinatura Premium", "Lazer", 25),
            (TransactionType::Credit, 200.00, "Presente - Aniversário", "Outros", 27),
        ];

        let now = Local::now();
        for (kind, amount, description, category, days_ago) in seed {
            let date = now - ChronoDuration::days(days_ago);
            let millis = self.next_id_millis();
            self.transactions.push(Transaction {
                id: Transaction::generate_id(kind, millis),
                transaction_type: kind,
                amount,
                description: description.to_string(),
                category: category.to_string(),
                date: date.to_rfc3339(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: f64) -> CreateTransactionRequest {
        CreateTransactionRequest {
            transaction_type: TransactionType::Debit,
            amount,
            description: "Cinema".to_string(),
            category: "Lazer".to_string(),
            date: None,
        }
    }

    #[test]
    fn test_seeded_backend_lists_newest_first() {
        let backend = Backend::new().unwrap();
        let listed = backend
            .list_transactions(&TransactionFilters::default())
            .unwrap();
        assert_eq!(listed.len(), 15);
        for pair in listed.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_create_inserts_and_affects_balance() {
        let mut backend = Backend::new().unwrap();
        let before = backend.balance();

        let created = backend.create_transaction(request(50.0)).unwrap();
        assert_eq!(created.transaction_type, TransactionType::Debit);

        let listed = backend
            .list_transactions(&TransactionFilters::default())
            .unwrap();
        assert_eq!(listed.len(), 16);
        assert!((backend.balance() - (before - 50.0)).abs() < 1e-9);
    }

    #[test]
    fn test_create_rejects_invalid_request() {
        let mut backend = Backend::new().unwrap();
        assert!(backend.create_transaction(request(0.0)).is_err());

        let mut no_description = request(10.0);
        no_description.description = "  ".to_string();
        assert!(backend.create_transaction(no_description).is_err());
    }

    #[test]
    fn test_create_rejects_future_date() {
        let mut backend = Backend::new().unwrap();
        let mut future = request(10.0);
        let tomorrow = Local::now().date_naive() + ChronoDuration::days(1);
        future.date = Some(tomorrow.format("%Y-%m-%d").to_string());
        assert!(backend.create_transaction(future).is_err());
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut backend = Backend::new().unwrap();
        let created = backend.create_transaction(request(50.0)).unwrap();

        let updated = backend
            .update_transaction(
                &created.id,
                UpdateTransactionRequest {
                    description: "Cinema IMAX".to_string(),
                    amount: 80.0,
                    category: "Lazer".to_string(),
                },
            )
            .unwrap();
        assert_eq!(updated.description, "Cinema IMAX");
        assert_eq!(updated.amount, 80.0);

        assert!(backend
            .update_transaction(
                "transaction::debit::1",
                UpdateTransactionRequest {
                    description: "x".to_string(),
                    amount: 1.0,
                    category: "Outros".to_string(),
                },
            )
            .is_err());
    }

    #[test]
    fn test_delete_removes_transaction() {
        let mut backend = Backend::new().unwrap();
        let created = backend.create_transaction(request(50.0)).unwrap();

        backend.delete_transaction(&created.id).unwrap();
        let listed = backend
            .list_transactions(&TransactionFilters::default())
            .unwrap();
        assert!(listed.iter().all(|t| t.id != created.id));

        assert!(backend.delete_transaction(&created.id).is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut backend = Backend::new().unwrap();
        let a = backend.create_transaction(request(1.0)).unwrap();
        let b = backend.create_transaction(request(2.0)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_stats_respect_filters() {
        let backend = Backend::new().unwrap();
        let credit_only = TransactionFilters {
            transaction_type: Some(TransactionType::Credit),
            ..Default::default()
        };
        let stats = backend.stats(&credit_only).unwrap();
        assert_eq!(stats.total_debit, 0.0);
        assert_eq!(stats.total_loan, 0.0);
        assert!(stats.total_credit > 0.0);
    }
}
