use crate::domain::model::SavedCalculation;
use crate::domain::ports::Storage;
use crate::utils::error::{QuoteError, Result};

/// Append-only sequence of saved calculations over a key-value storage
/// surface. Every mutation rewrites the full serialized collection; the
/// port never sees a partial update.
pub struct CalculationStore<S: Storage> {
    storage: S,
    collection: String,
}

impl<S: Storage> CalculationStore<S> {
    pub fn new(storage: S, collection: impl Into<String>) -> Self {
        Self {
            storage,
            collection: collection.into(),
        }
    }

    /// Appends the calculation and returns its position in the sequence.
    pub async fn append(&self, calc: SavedCalculation) -> Result<usize> {
        let mut records = self.load().await?;
        records.push(calc);
        self.persist(&records).await?;

        tracing::debug!("Collection now holds {} calculations", records.len());
        Ok(records.len() - 1)
    }

    /// All saved calculations in insertion order.
    pub async fn list(&self) -> Result<Vec<SavedCalculation>> {
        self.load().await
    }

    pub async fn get(&self, index: usize) -> Result<SavedCalculation> {
        let records = self.load().await?;
        let count = records.len();

        records
            .into_iter()
            .nth(index)
            .ok_or(QuoteError::CalculationNotFoundError { index, count })
    }

    // An absent collection reads as the empty sequence.
    async fn load(&self) -> Result<Vec<SavedCalculation>> {
        match self.storage.read(&self.collection).await? {
            Some(raw) => Ok(serde_json::from_slice(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn persist(&self, records: &[SavedCalculation]) -> Result<()> {
        let raw = serde_json::to_vec(records)?;
        self.storage.write(&self.collection, &raw).await
    }
}
