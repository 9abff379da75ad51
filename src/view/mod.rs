//! The transaction list view: fetch lifecycle, filter state, and the
//! derived list of visible rows. Rendering lives in `ui`.

mod filter;
mod state;

pub use filter::Filter;
pub use state::FetchState;

use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::{FetchError, Query, TransactionSource};
use crate::models::{find_duplicate_id, Transaction};

type FetchResult = Result<Vec<Transaction>, FetchError>;

/// Captured when a fetch starts; a result is applied only if its ticket is
/// still the latest one and the view is still mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Mounted,
    Unmounted,
}

struct InFlight {
    ticket: FetchTicket,
    rx: oneshot::Receiver<FetchResult>,
    task: JoinHandle<()>,
}

pub struct TransactionListView {
    source: Arc<dyn TransactionSource>,
    mount_query: Query,
    state: FetchState,
    filter: Filter,
    phase: Phase,
    generation: u64,
    in_flight: Option<InFlight>,
    fetch_count: usize,
}

impl TransactionListView {
    pub fn new(source: Arc<dyn TransactionSource>, mount_query: Query) -> Self {
        Self {
            source,
            mount_query,
            state: FetchState::Idle,
            filter: Filter::default(),
            phase: Phase::Fresh,
            generation: 0,
            in_flight: None,
            fetch_count: 0,
        }
    }

    /// Start the initial fetch. Only the first call does anything.
    /// Must be called inside a tokio runtime.
    pub fn mount(&mut self) -> Option<FetchTicket> {
        if self.phase != Phase::Fresh {
            return None;
        }
        self.phase = Phase::Mounted;
        Some(self.fetch(self.mount_query.clone()))
    }

    /// Re-issue the mount query.
    pub fn reload(&mut self) -> Option<FetchTicket> {
        self.is_mounted()
            .then(|| self.fetch(self.mount_query.clone()))
    }

    /// Ask the endpoint to filter, sending the current selections as query
    /// parameters. Filter changes alone never call this.
    pub fn fetch_with_filters(&mut self) -> Option<FetchTicket> {
        self.is_mounted().then(|| self.fetch(self.filter.to_query()))
    }

    fn fetch(&mut self, query: Query) -> FetchTicket {
        self.generation += 1;
        self.fetch_count += 1;
        let ticket = FetchTicket {
            generation: self.generation,
        };
        self.state.begin();
        info!(generation = ticket.generation, %query, "fetching transactions");

        let source = Arc::clone(&self.source);
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let result = source.fetch(&query).await;
            if tx.send(result).is_err() {
                debug!("fetch result dropped, receiver gone");
            }
        });

        if let Some(old) = self.in_flight.replace(InFlight { ticket, rx, task }) {
            debug!(generation = old.ticket.generation, "aborting superseded fetch");
            old.task.abort();
        }
        ticket
    }

    /// Apply a finished fetch. Returns whether the state changed.
    pub fn apply(&mut self, ticket: FetchTicket, result: FetchResult) -> bool {
        if self.phase != Phase::Mounted {
            debug!(generation = ticket.generation, "view not mounted, dropping fetch result");
            return false;
        }
        if ticket.generation != self.generation {
            debug!(
                generation = ticket.generation,
                latest = self.generation,
                "dropping superseded fetch result"
            );
            return false;
        }

        match result {
            Ok(data) => {
                if let Some(id) = find_duplicate_id(&data) {
                    warn!(id, "duplicate transaction id in response");
                }
                info!(count = data.len(), "transactions loaded");
                self.state.succeed(data);
            }
            Err(err) => {
                warn!(kind = %err.kind(), error = %err, "transaction fetch failed");
                self.state.fail(&err);
            }
        }
        true
    }

    /// Apply the in-flight result if it has arrived, without blocking.
    pub fn poll(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };
        let result = match in_flight.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(task_lost()),
        };
        let ticket = in_flight.ticket;
        self.in_flight = None;
        self.apply(ticket, result)
    }

    /// Wait for the in-flight fetch, if any, and apply it.
    pub async fn settle(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };
        let result = in_flight.rx.await.unwrap_or_else(|_| Err(task_lost()));
        self.apply(in_flight.ticket, result)
    }

    /// Tear down: abort any outstanding request and refuse later results.
    pub fn unmount(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.phase = Phase::Unmounted;
        if let Some(in_flight) = self.in_flight.take() {
            debug!(generation = in_flight.ticket.generation, "aborting in-flight fetch");
            in_flight.task.abort();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.phase == Phase::Mounted
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Number of fetches issued since creation.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.filter.status = status.into();
    }

    pub fn cycle_category(&mut self, delta: i32) {
        self.filter.cycle_category(delta);
    }

    pub fn cycle_status(&mut self, delta: i32) {
        self.filter.cycle_status(delta);
    }

    /// Held transactions that pass the filter, re-derived on every call.
    pub fn visible(&self) -> Vec<&Transaction> {
        self.filter.apply(self.state.transactions())
    }

    pub fn total(&self) -> usize {
        self.state.transactions().len()
    }
}

impl Drop for TransactionListView {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn task_lost() -> FetchError {
    FetchError::Other("Fetch task ended without a result".into())
}
