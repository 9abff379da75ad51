use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};

use super::{FetchError, Query};
use crate::models::{Transaction, TransactionsResponse};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/transaction";

/// Something that can produce the transaction list for a query.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch(&self, query: &Query) -> Result<Vec<Transaction>, FetchError>;
}

/// Reads transactions from the REST collection endpoint.
pub struct HttpSource {
    http_client: Client,
    endpoint: Url,
}

impl HttpSource {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TransactionSource for HttpSource {
    async fn fetch(&self, query: &Query) -> Result<Vec<Transaction>, FetchError> {
        let url = query.to_url(&self.endpoint);
        debug!(%url, "GET transactions");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "transaction endpoint returned an error status");
            return Err(FetchError::HttpStatus(status));
        }

        // Decode separately so a bad body is reported as a parse error
        let body = response.bytes().await?;
        let parsed: TransactionsResponse = serde_json::from_slice(&body)?;
        debug!(count = parsed.data.len(), "decoded transactions");
        Ok(parsed.data)
    }
}
