use crate::api::{ErrorKind, FetchError};
use crate::models::Transaction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&FetchError> for FetchFailure {
    fn from(err: &FetchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.display_message(),
        }
    }
}

/// Fetch lifecycle. Exactly one branch is rendered at a time. Loading and
/// Failed carry the last good list so it survives a failed refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading {
        previous: Vec<Transaction>,
    },
    Loaded(Vec<Transaction>),
    Failed {
        error: FetchFailure,
        previous: Vec<Transaction>,
    },
}

impl FetchState {
    /// The last successfully fetched list, whatever the current branch.
    pub fn transactions(&self) -> &[Transaction] {
        match self {
            Self::Idle => &[],
            Self::Loading { previous } => previous,
            Self::Loaded(data) => data,
            Self::Failed { previous, .. } => previous,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Loading { .. } => "LOADING",
            Self::Loaded(_) => "LOADED",
            Self::Failed { .. } => "FAILED",
        }
    }

    fn take_transactions(&mut self) -> Vec<Transaction> {
        match std::mem::take(self) {
            Self::Idle => Vec::new(),
            Self::Loading { previous } => previous,
            Self::Loaded(data) => data,
            Self::Failed { previous, .. } => previous,
        }
    }

    pub(super) fn begin(&mut self) {
        let previous = self.take_transactions();
        *self = Self::Loading { previous };
    }

    pub(super) fn succeed(&mut self, data: Vec<Transaction>) {
        *self = Self::Loaded(data);
    }

    pub(super) fn fail(&mut self, err: &FetchError) {
        let previous = self.take_transactions();
        *self = Self::Failed {
            error: err.into(),
            previous,
        };
    }
}
