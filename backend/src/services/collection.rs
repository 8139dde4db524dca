//! Collection ledger service (Alınanlar)

use std::sync::Arc;

use shared::{CollectionEdit, CollectionRecord, NewCollection};

use crate::error::AppResult;
use crate::storage::LedgerStore;
use crate::SharedLedgers;

/// Service for recording and correcting returned receipts
#[derive(Clone)]
pub struct CollectionService {
    ledgers: SharedLedgers,
    store: Arc<LedgerStore>,
}

impl CollectionService {
    pub fn new(ledgers: SharedLedgers, store: Arc<LedgerStore>) -> Self {
        Self { ledgers, store }
    }

    pub async fn list(&self) -> Vec<CollectionRecord> {
        self.ledgers.read().await.collections.clone()
    }

    /// Match the serial to its issuance, append it and write the ledger file
    pub async fn record(&self, input: NewCollection) -> AppResult<CollectionRecord> {
        let mut ledgers = self.ledgers.write().await;
        let record = ledgers.append_collection(input)?;

        if let Err(e) = self.store.persist_collections(&ledgers.collections).await {
            ledgers.collections.pop();
            return Err(e);
        }

        tracing::info!(
            "Collected serial {} against issuance {}",
            record.serial_number,
            record.issuance_id
        );
        Ok(record)
    }

    pub async fn replace(&self, edits: Vec<CollectionEdit>) -> AppResult<Vec<CollectionRecord>> {
        let mut ledgers = self.ledgers.write().await;
        let previous = ledgers.replace_collections(edits)?;

        if let Err(e) = self.store.persist_collections(&ledgers.collections).await {
            ledgers.collections = previous;
            return Err(e);
        }

        tracing::info!("Collection ledger updated ({} rows)", ledgers.collections.len());
        Ok(ledgers.collections.clone())
    }
}
