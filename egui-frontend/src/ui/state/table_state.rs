//! # Table State Module
//!
//! State behind the statement view: search, per-field sorting, type
//! filtering and load-more pagination over the loaded transaction list.
//! The filtering pipeline itself is pure so it can be tested without a UI.

use shared::{
    matches_search, sort_transactions, SortDirection, SortField, Transaction, TransactionType,
};

/// Rows revealed per "Carregar mais" click
pub const PAGE_SIZE: usize = 10;

#[derive(Debug)]
pub struct TableState {
    /// Transactions as loaded from the backend, newest first
    pub loaded_transactions: Vec<Transaction>,
    /// Whether the statement load has completed at least once
    pub initial_load_complete: bool,
    /// Current search query (matched against description and category)
    pub search_query: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// Optional type filter (Receita/Despesa/Empréstimo)
    pub type_filter: Option<TransactionType>,
    /// How many filtered rows are currently revealed
    pub visible_count: usize,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            loaded_transactions: Vec::new(),
            initial_load_complete: false,
            search_query: String::new(),
            sort_field: SortField::Date,
            sort_direction: SortDirection::Descending,
            type_filter: None,
            visible_count: PAGE_SIZE,
        }
    }

    /// Replace the loaded list after a (re)load
    pub fn set_transactions(&mut self, transactions: Vec<Transaction>) {
        self.loaded_transactions = transactions;
        self.initial_load_complete = true;
        self.reset_pagination();
    }

    /// Search input changed; pagination restarts from the first page
    pub fn set_search_query(&mut self, query: String) {
        if query != self.search_query {
            self.search_query = query;
            self.reset_pagination();
        }
    }

    /// Type filter changed; pagination restarts from the first page
    pub fn set_type_filter(&mut self, filter: Option<TransactionType>) {
        if filter != self.type_filter {
            self.type_filter = filter;
            self.reset_pagination();
        }
    }

    /// Header click: same field toggles direction, a new field starts at
    /// its natural direction (newest first for dates, ascending otherwise).
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = Self::default_direction(field);
        }
        self.reset_pagination();
    }

    fn default_direction(field: SortField) -> SortDirection {
        match field {
            SortField::Date => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    pub fn reset_pagination(&mut self) {
        self.visible_count = PAGE_SIZE;
    }

    pub fn load_more(&mut self) {
        self.visible_count += PAGE_SIZE;
    }

    /// All rows passing the search and type filter, sorted
    pub fn filtered_transactions(&self) -> Vec<Transaction> {
        let mut rows: Vec<Transaction> = self
            .loaded_transactions
            .iter()
            .filter(|t| matches_search(t, &self.search_query))
            .filter(|t| {
                self.type_filter
                    .map_or(true, |kind| t.transaction_type == kind)
            })
            .cloned()
            .collect();
        sort_transactions(&mut rows, self.sort_field, self.sort_direction);
        rows
    }

    /// The filtered rows limited to the revealed window, plus whether more
    /// rows remain beyond it.
    pub fn visible_transactions(&self) -> (Vec<Transaction>, bool) {
        let filtered = self.filtered_transactions();
        let has_more = filtered.len() > self.visible_count;
        let visible = filtered.into_iter().take(self.visible_count).collect();
        (visible, has_more)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: TransactionType, amount: f64, description: &str, day: u32) -> Transaction {
        Transaction {
            id: format!("transaction::{}::{}", kind.as_str(), day),
            transaction_type: kind,
            amount,
            description: description.to_string(),
            category: "Outros".to_string(),
            date: format!("2024-03-{:02}T12:00:00+00:00", day),
        }
    }

    fn populated() -> TableState {
        let mut state = TableState::new();
        let mut transactions = Vec::new();
        for day in 1..=25 {
            let kind = if day % 3 == 0 {
                TransactionType::Credit
            } else {
                TransactionType::Debit
            };
            transactions.push(tx(kind, day as f64, &format!("Compra {}", day), day));
        }
        transactions.push(tx(TransactionType::Loan, 1000.0, "Empréstimo Banco", 26));
        state.set_transactions(transactions);
        state
    }

    #[test]
    fn test_pagination_window_and_load_more() {
        let mut state = populated();
        let (visible, has_more) = state.visible_transactions();
        assert_eq!(visible.len(), PAGE_SIZE);
        assert!(has_more);

        state.load_more();
        let (visible, has_more) = state.visible_transactions();
        assert_eq!(visible.len(), PAGE_SIZE * 2);
        assert!(has_more);

        state.load_more();
        let (visible, has_more) = state.visible_transactions();
        assert_eq!(visible.len(), 26);
        assert!(!has_more);
    }

    #[test]
    fn test_search_filters_and_resets_pagination() {
        let mut state = populated();
        state.load_more();
        assert_eq!(state.visible_count, PAGE_SIZE * 2);

        state.set_search_query("empréstimo".to_string());
        assert_eq!(state.visible_count, PAGE_SIZE);
        let (visible, has_more) = state.visible_transactions();
        assert_eq!(visible.len(), 1);
        assert!(!has_more);
        assert_eq!(visible[0].description, "Empréstimo Banco");
    }

    #[test]
    fn test_same_query_does_not_reset_pagination() {
        let mut state = populated();
        state.set_search_query("Compra".to_string());
        state.load_more();
        state.set_search_query("Compra".to_string());
        assert_eq!(state.visible_count, PAGE_SIZE * 2);
    }

    #[test]
    fn test_type_filter() {
        let mut state = populated();
        state.set_type_filter(Some(TransactionType::Loan));
        let (visible, _) = state.visible_transactions();
        assert_eq!(visible.len(), 1);

        state.set_type_filter(Some(TransactionType::Credit));
        let (visible, _) = state.visible_transactions();
        assert!(visible.iter().all(|t| t.transaction_type == TransactionType::Credit));
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let state = populated();
        let rows = state.filtered_transactions();
        assert_eq!(rows[0].description, "Empréstimo Banco");
        for pair in rows.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut state = populated();
        state.toggle_sort(SortField::Date);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
        let rows = state.filtered_transactions();
        assert_eq!(rows[0].description, "Compra 1");

        state.toggle_sort(SortField::Date);
        assert_eq!(state.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_new_sort_field_starts_ascending() {
        let mut state = populated();
        state.toggle_sort(SortField::Amount);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
        let rows = state.filtered_transactions();
        assert!(rows[0].amount <= rows[1].amount);
    }

    #[test]
    fn test_sort_resets_pagination() {
        let mut state = populated();
        state.load_more();
        state.toggle_sort(SortField::Amount);
        assert_eq!(state.visible_count, PAGE_SIZE);
    }
}
