use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category labels offered by the filter selector. The endpoint may return
/// any other label; these are suggestions, not a constraint.
pub const SUGGESTED_CATEGORIES: &[&str] = &["Food", "Utilities", "Transport"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Complete,
}

impl TransactionStatus {
    pub fn all() -> &'static [TransactionStatus] {
        &[Self::Pending, Self::Complete]
    }

    /// The raw wire value, also what the table shows.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub category: String,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }
}

/// Body of `GET /transaction`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsResponse {
    pub data: Vec<Transaction>,
}

/// First id that appears more than once, if any. Rows are keyed by id.
pub fn find_duplicate_id(txns: &[Transaction]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    txns.iter()
        .map(|t| t.id.as_str())
        .find(|id| !seen.insert(*id))
}
