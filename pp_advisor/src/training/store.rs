//! Training sample store trait and in-memory implementation.
//!
//! Real persistence lives outside the engine; it implements
//! [`TrainingSampleStore`] and the engine only ever sees the trait.

use async_trait::async_trait;
use log::debug;
use std::collections::HashSet;
use tokio::sync::RwLock;

use super::{
    errors::{TrainingResult, TrainingStoreError},
    models::{SampleId, TrainingSample, TrainingStats},
};
use crate::analysis::{SessionId, UserId};

/// Trait for training sample storage
#[async_trait]
pub trait TrainingSampleStore: Send + Sync {
    /// Store a new sample
    async fn create(&self, sample: TrainingSample) -> TrainingResult<SampleId>;

    /// Find sample by ID
    async fn get_by_id(&self, id: SampleId) -> TrainingResult<TrainingSample>;

    /// All samples for a user, oldest first
    async fn get_by_user(&self, user_id: UserId) -> TrainingResult<Vec<TrainingSample>>;

    /// All samples for a game session, oldest first
    async fn get_by_session(&self, session_id: SessionId) -> TrainingResult<Vec<TrainingSample>>;

    /// Store several samples at once; nothing is stored if any ID is taken
    async fn batch_insert(&self, samples: Vec<TrainingSample>) -> TrainingResult<usize>;

    /// Counts over every stored sample
    async fn get_training_stats(&self) -> TrainingResult<TrainingStats>;
}

/// In-memory implementation of `TrainingSampleStore`
#[derive(Debug, Default)]
pub struct InMemoryTrainingStore {
    samples: RwLock<Vec<TrainingSample>>,
}

impl InMemoryTrainingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.samples.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.samples.read().await.is_empty()
    }
}

#[async_trait]
impl TrainingSampleStore for InMemoryTrainingStore {
    async fn create(&self, sample: TrainingSample) -> TrainingResult<SampleId> {
        let mut samples = self.samples.write().await;
        if samples.iter().any(|stored| stored.id == sample.id) {
            return Err(TrainingStoreError::DuplicateSample(sample.id));
        }

        let id = sample.id;
        debug!(
            "Stored training sample {} for user {} session {}",
            id, sample.user_id, sample.session_id
        );
        samples.push(sample);
        Ok(id)
    }

    async fn get_by_id(&self, id: SampleId) -> TrainingResult<TrainingSample> {
        self.samples
            .read()
            .await
            .iter()
            .find(|sample| sample.id == id)
            .cloned()
            .ok_or(TrainingStoreError::SampleNotFound(id))
    }

    async fn get_by_user(&self, user_id: UserId) -> TrainingResult<Vec<TrainingSample>> {
        Ok(self
            .samples
            .read()
            .await
            .iter()
            .filter(|sample| sample.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_by_session(&self, session_id: SessionId) -> TrainingResult<Vec<TrainingSample>> {
        Ok(self
            .samples
            .read()
            .await
            .iter()
            .filter(|sample| sample.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn batch_insert(&self, batch: Vec<TrainingSample>) -> TrainingResult<usize> {
        let mut samples = self.samples.write().await;

        let mut ids: HashSet<SampleId> = samples.iter().map(|sample| sample.id).collect();
        for sample in &batch {
            if !ids.insert(sample.id) {
                return Err(TrainingStoreError::DuplicateSample(sample.id));
            }
        }

        let count = batch.len();
        samples.extend(batch);
        debug!("Stored batch of {} training samples", count);
        Ok(count)
    }

    async fn get_training_stats(&self) -> TrainingResult<TrainingStats> {
        Ok(self.samples.read().await.iter().collect())
    }
}
