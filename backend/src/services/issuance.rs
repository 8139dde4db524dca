//! Issuance ledger service (Verilenler)

use std::sync::Arc;

use shared::{IssuanceEdit, IssuanceRecord, NewIssuance};

use crate::error::{AppError, AppResult};
use crate::storage::LedgerStore;
use crate::SharedLedgers;

/// Service for recording and correcting issued receipt ranges
#[derive(Clone)]
pub struct IssuanceService {
    ledgers: SharedLedgers,
    store: Arc<LedgerStore>,
}

impl IssuanceService {
    pub fn new(ledgers: SharedLedgers, store: Arc<LedgerStore>) -> Self {
        Self { ledgers, store }
    }

    /// List the issuance ledger in stored order
    pub async fn list(&self) -> Vec<IssuanceRecord> {
        self.ledgers.read().await.issuances.clone()
    }

    /// Append a new issued range and write the ledger file
    pub async fn record(&self, input: NewIssuance) -> AppResult<IssuanceRecord> {
        let mut ledgers = self.ledgers.write().await;
        let id = ledgers.append_issuance(input)?;

        if let Err(e) = self.store.persist_issuances(&ledgers.issuances).await {
            ledgers.issuances.pop();
            return Err(e);
        }

        let record = ledgers
            .issuances
            .last()
            .cloned()
            .ok_or_else(|| AppError::Internal("Issuance vanished after append".to_string()))?;
        tracing::info!(
            "Recorded issuance {} for {} / {} ({}..={})",
            id,
            record.department,
            record.location,
            record.range_start,
            record.range_end
        );
        Ok(record)
    }

    /// Replace the ledger with corrected rows and write the ledger file
    pub async fn replace(&self, edits: Vec<IssuanceEdit>) -> AppResult<Vec<IssuanceRecord>> {
        let mut ledgers = self.ledgers.write().await;
        let previous = ledgers.replace_issuances(edits)?;

        if let Err(e) = self.store.persist_issuances(&ledgers.issuances).await {
            ledgers.issuances = previous;
            return Err(e);
        }

        tracing::info!("Issuance ledger updated ({} rows)", ledgers.issuances.len());
        Ok(ledgers.issuances.clone())
    }
}
