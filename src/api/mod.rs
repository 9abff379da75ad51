mod client;
mod error;
mod query;

pub use client::{HttpSource, TransactionSource, DEFAULT_ENDPOINT};
pub use error::{ErrorKind, FetchError};
pub use query::Query;

#[cfg(test)]
mod tests;
