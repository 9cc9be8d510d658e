//! # Chart State Module
//!
//! Data preparation for the dashboard bar chart: the current month's
//! transactions bucketed into weeks, one entries bar (credits + loans) and
//! one exits bar (debits) per bucket, plus the y-axis scale rule.

use chrono::{DateTime, Datelike};

use shared::Transaction;

/// Y-axis labels snap up to a multiple of this step
pub const Y_AXIS_STEP: f64 = 750.0;

/// One week of the month on the chart
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyBucket {
    /// "Sem 1".."Sem 5"
    pub label: String,
    pub entries: f64,
    pub exits: f64,
}

#[derive(Debug, Default)]
pub struct ChartState {
    pub buckets: Vec<WeeklyBucket>,
    pub prepared: bool,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the buckets for the given month from the full ledger
    pub fn prepare(&mut self, transactions: &[Transaction], year: i32, month: u32) {
        self.buckets = bucket_by_week(transactions, year, month);
        self.prepared = true;
    }

    /// Upper bound of the y axis for the current buckets
    pub fn y_axis_max(&self) -> f64 {
        let data_max = self
            .buckets
            .iter()
            .flat_map(|b| [b.entries, b.exits])
            .fold(0.0_f64, f64::max);
        y_axis_max_for(data_max)
    }
}

/// Group a month's transactions into weekly buckets. Weeks are day ranges
/// 1-7, 8-14, 15-21, 22-28 and 29-31, labeled "Sem N"; a trailing empty
/// fifth week is dropped so short months don't render hollow bars.
pub fn bucket_by_week(transactions: &[Transaction], year: i32, month: u32) -> Vec<WeeklyBucket> {
    let mut buckets: Vec<WeeklyBucket> = (1..=5)
        .map(|i| WeeklyBucket {
            label: format!("Sem {}", i),
            entries: 0.0,
            exits: 0.0,
        })
        .collect();

    for transaction in transactions {
        let Ok(date) = DateTime::parse_from_rfc3339(&transaction.date) else {
            continue;
        };
        if date.year() != year || date.month() != month {
            continue;
        }
        let week = ((date.day() - 1) / 7).min(4) as usize;
        if transaction.transaction_type.is_inflow() {
            buckets[week].entries += transaction.amount;
        } else {
            buckets[week].exits += transaction.amount;
        }
    }

    while buckets
        .last()
        .map_or(false, |b| b.entries == 0.0 && b.exits == 0.0)
        && buckets.len() > 4
    {
        buckets.pop();
    }

    buckets
}

/// Y-axis rule from the product chart: at least 500, padded by 10% and
/// rounded up to the next multiple of `Y_AXIS_STEP`.
pub fn y_axis_max_for(data_max: f64) -> f64 {
    let padded = data_max.max(500.0) * 1.1;
    (padded / Y_AXIS_STEP).ceil() * Y_AXIS_STEP
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransactionType;

    fn tx(kind: TransactionType, amount: f64, date: &str) -> Transaction {
        Transaction {
            id: format!("transaction::{}::{}", kind.as_str(), amount as u64),
            transaction_type: kind,
            amount,
            description: "Teste".to_string(),
            category: "Outros".to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_buckets_partition_the_month() {
        let transactions = vec![
            tx(TransactionType::Credit, 100.0, "2024-03-01T10:00:00+00:00"),
            tx(TransactionType::Credit, 50.0, "2024-03-07T10:00:00+00:00"),
            tx(TransactionType::Debit, 30.0, "2024-03-08T10:00:00+00:00"),
            tx(TransactionType::Loan, 200.0, "2024-03-15T10:00:00+00:00"),
            tx(TransactionType::Debit, 80.0, "2024-03-31T10:00:00+00:00"),
        ];
        let buckets = bucket_by_week(&transactions, 2024, 3);

        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[0].entries, 150.0);
        assert_eq!(buckets[0].exits, 0.0);
        assert_eq!(buckets[1].exits, 30.0);
        // Loans count as entries
        assert_eq!(buckets[2].entries, 200.0);
        assert_eq!(buckets[4].exits, 80.0);
    }

    #[test]
    fn test_other_months_are_excluded() {
        let transactions = vec![
            tx(TransactionType::Credit, 100.0, "2024-02-29T10:00:00+00:00"),
            tx(TransactionType::Credit, 40.0, "2024-03-02T10:00:00+00:00"),
        ];
        let buckets = bucket_by_week(&transactions, 2024, 3);
        assert_eq!(buckets[0].entries, 40.0);
    }

    #[test]
    fn test_trailing_empty_week_dropped() {
        let transactions = vec![tx(TransactionType::Credit, 10.0, "2024-03-02T10:00:00+00:00")];
        let buckets = bucket_by_week(&transactions, 2024, 3);
        assert_eq!(buckets.len(), 4);
    }

    #[test]
    fn test_y_axis_rounds_up_to_step() {
        // Floor of 500 padded by 10% -> 550 -> one step
        assert_eq!(y_axis_max_for(0.0), 750.0);
        assert_eq!(y_axis_max_for(500.0), 750.0);
        // 2000 * 1.1 = 2200 -> 2250
        assert_eq!(y_axis_max_for(2000.0), 2250.0);
        // Exact multiples still round up past the padding
        assert_eq!(y_axis_max_for(750.0), 1500.0);
    }

    #[test]
    fn test_chart_state_prepare() {
        let mut state = ChartState::new();
        assert!(!state.prepared);
        state.prepare(
            &[tx(TransactionType::Credit, 3000.0, "2024-03-05T10:00:00+00:00")],
            2024,
            3,
        );
        assert!(state.prepared);
        assert_eq!(state.y_axis_max(), 3750.0);
    }
}
