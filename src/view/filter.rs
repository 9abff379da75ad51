use crate::api::Query;
use crate::models::{Transaction, TransactionStatus, SUGGESTED_CATEGORIES};

/// Client-held predicate over the fetched list. An empty field matches
/// everything; otherwise comparison is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub category: String,
    pub status: String,
}

impl Filter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        (self.category.is_empty() || txn.category == self.category)
            && (self.status.is_empty() || txn.status.as_str() == self.status)
    }

    /// Matching transactions in their original order.
    pub fn apply<'a>(&self, txns: &'a [Transaction]) -> Vec<&'a Transaction> {
        txns.iter().filter(|t| self.matches(t)).collect()
    }

    pub fn is_active(&self) -> bool {
        !self.category.is_empty() || !self.status.is_empty()
    }

    pub fn to_query(&self) -> Query {
        Query::from_selection(&self.category, &self.status)
    }

    /// Selector options for category; `""` is "All Categories".
    pub fn category_options() -> Vec<&'static str> {
        std::iter::once("")
            .chain(SUGGESTED_CATEGORIES.iter().copied())
            .collect()
    }

    /// Selector options for status; `""` is "All Statuses".
    pub fn status_options() -> Vec<&'static str> {
        std::iter::once("")
            .chain(TransactionStatus::all().iter().map(|s| s.as_str()))
            .collect()
    }

    pub fn cycle_category(&mut self, delta: i32) {
        self.category = cycle(&self.category, &Self::category_options(), delta);
    }

    pub fn cycle_status(&mut self, delta: i32) {
        self.status = cycle(&self.status, &Self::status_options(), delta);
    }
}

/// Step through `options` from `current`, wrapping at both ends. A value
/// outside the list is treated as sitting on the first option.
fn cycle(current: &str, options: &[&str], delta: i32) -> String {
    if options.is_empty() {
        return current.to_string();
    }
    let len = options.len() as i64;
    let idx = options.iter().position(|o| *o == current).unwrap_or(0) as i64;
    let next = (idx + i64::from(delta)).rem_euclid(len) as usize;
    options[next].to_string()
}
