mod transaction;

pub use transaction::{
    find_duplicate_id, Transaction, TransactionStatus, TransactionsResponse, SUGGESTED_CATEGORIES,
};

#[cfg(test)]
mod tests;
