//! # Data Loading Module
//!
//! Completion of pending backend operations and the refresh pipeline that
//! keeps every page's state in sync with the mock ledger.
//!
//! All backend calls are queued with a deadline (`schedule`) and finished
//! here on the first frame past it, which gives the app the fixed
//! artificial delay of a network round trip without threads: one logical
//! actor, no cancellation, no retries.

use chrono::{DateTime, Datelike, Local};
use log::warn;
use std::time::Instant;

use crate::ui::app_state::{FinanceApp, PendingKind};
use shared::{calculate_stats, Transaction, TransactionFilters};

impl FinanceApp {
    /// Complete every pending operation whose deadline passed. Returns true
    /// while any remain, so the caller keeps repainting.
    pub fn process_pending(&mut self, now: Instant) -> bool {
        let mut due = Vec::new();
        self.pending.retain_mut(|op| {
            if now >= op.ready_at {
                due.push(std::mem::replace(&mut op.kind, PendingKind::LoadAll));
                false
            } else {
                true
            }
        });
        for kind in due {
            self.complete(kind);
        }
        !self.pending.is_empty()
    }

    fn complete(&mut self, kind: PendingKind) {
        let now = Instant::now();
        match kind {
            PendingKind::LoadAll => {
                self.refresh_data();
                self.ui.loading = false;
            }
            PendingKind::Submit(request) => {
                self.form.is_submitting = false;
                match self.backend.create_transaction(request) {
                    Ok(_) => {
                        self.form.clear();
                        self.ui.set_success("Transação criada com sucesso!", now);
                        self.refresh_data();
                    }
                    Err(e) => {
                        warn!("Transaction submission failed: {}", e);
                        self.ui.set_error(format!("Erro ao criar transação: {}", e));
                    }
                }
            }
            PendingKind::Update { id, update } => {
                match self.backend.update_transaction(&id, update) {
                    Ok(_) => {
                        self.edit_form = None;
                        self.ui
                            .set_success("Transação atualizada com sucesso!", now);
                        self.refresh_data();
                    }
                    Err(e) => {
                        warn!("Transaction update failed: {}", e);
                        self.ui
                            .set_error(format!("Erro ao atualizar transação: {}", e));
                    }
                }
            }
            PendingKind::Delete(id) => match self.backend.delete_transaction(&id) {
                Ok(()) => {
                    self.delete_confirm = None;
                    self.ui.set_success("Transação deletada com sucesso!", now);
                    self.refresh_data();
                }
                Err(e) => {
                    warn!("Transaction delete failed: {}", e);
                    self.ui
                        .set_error(format!("Erro ao deletar transação: {}", e));
                }
            },
        }
    }

    /// Re-read everything the pages show from the backend. Mutations call
    /// this synchronously: their delay already ran on the operation itself.
    pub fn refresh_data(&mut self) {
        match self.backend.list_transactions(&TransactionFilters::default()) {
            Ok(transactions) => {
                self.core.current_balance = self.backend.balance();

                let now = Local::now();
                let this_month = current_month_transactions(&transactions, now.year(), now.month());
                self.core.month_stats = Some(calculate_stats(&this_month));
                self.chart.prepare(&transactions, now.year(), now.month());

                self.table.set_transactions(transactions);
            }
            Err(e) => {
                warn!("Failed to load transactions: {}", e);
                self.ui
                    .set_error(format!("Erro ao carregar transações: {}", e));
            }
        }
    }
}

/// Transactions dated inside the given month
fn current_month_transactions(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| {
            DateTime::parse_from_rfc3339(&t.date)
                .map(|d| d.year() == year && d.month() == month)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
