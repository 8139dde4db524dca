//! Whole-session operations over both ledgers

use std::sync::Arc;

use serde::Serialize;

use crate::error::AppResult;
use crate::storage::LedgerStore;
use crate::SharedLedgers;

/// Row counts of the in-memory ledgers
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LedgerSizes {
    pub issuances: usize,
    pub collections: usize,
}

#[derive(Clone)]
pub struct SessionService {
    ledgers: SharedLedgers,
    store: Arc<LedgerStore>,
}

impl SessionService {
    pub fn new(ledgers: SharedLedgers, store: Arc<LedgerStore>) -> Self {
        Self { ledgers, store }
    }

    pub async fn sizes(&self) -> LedgerSizes {
        let ledgers = self.ledgers.read().await;
        LedgerSizes {
            issuances: ledgers.issuances.len(),
            collections: ledgers.collections.len(),
        }
    }

    /// Write both ledgers as they are in memory
    pub async fn save_all(&self) -> AppResult<LedgerSizes> {
        let ledgers = self.ledgers.read().await;
        self.store.persist(&ledgers).await?;

        let sizes = LedgerSizes {
            issuances: ledgers.issuances.len(),
            collections: ledgers.collections.len(),
        };
        tracing::info!(
            "Saved {} issuance and {} collection records",
            sizes.issuances,
            sizes.collections
        );
        Ok(sizes)
    }
}
