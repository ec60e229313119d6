//! Practice progress backed by the key-value table.

use std::collections::BTreeSet;
use std::sync::Arc;

use asma_core::store::{ACHIEVEMENTS_KEY, ATTEMPTS_KEY, MASTERED_KEY};
use asma_core::{
    catalog, AchievementStatus, AttemptOutcome, AttemptStats, MasteryProgress, PersistedProgress,
    ProgressEvent, Tracker,
};
use tokio::sync::Mutex;

use crate::db::Database;
use crate::error::{ApiError, Result};

/// Owns the single tracker and writes it back after every mutation.
///
/// The lock is held across the write so writes land in mutation order. A
/// failed write rolls the tracker back to what is stored.
pub struct ProgressService {
    db: Arc<Database>,
    tracker: Mutex<Tracker>,
}

impl ProgressService {
    /// Load persisted progress. Missing or corrupt values start empty.
    pub async fn load(db: Arc<Database>) -> Result<Self> {
        let progress = PersistedProgress::decode(
            db.get_value(ATTEMPTS_KEY).await?.as_deref(),
            db.get_value(MASTERED_KEY).await?.as_deref(),
            db.get_value(ACHIEVEMENTS_KEY).await?.as_deref(),
        );

        let tracker = Tracker::from_progress(progress);
        tracing::info!(
            attempts = tracker.attempts().len(),
            mastered = tracker.mastered().len(),
            "loaded practice progress"
        );

        Ok(Self::new(db, tracker))
    }

    /// Wrap `tracker`, logging its events.
    pub fn new(db: Arc<Database>, mut tracker: Tracker) -> Self {
        tracker.subscribe(|event: &ProgressEvent| match event {
            ProgressEvent::AttemptRecorded {
                item_index,
                accuracy,
            } => tracing::debug!(item_index, accuracy, "attempt recorded"),
            ProgressEvent::ItemMastered { item_index, tier } => {
                tracing::info!(item_index, tier = tier.as_str(), "item mastered")
            }
            ProgressEvent::AchievementUnlocked { id } => {
                tracing::info!(achievement = id.as_str(), "achievement unlocked")
            }
            ProgressEvent::ProgressReset => tracing::info!("progress reset"),
        });

        Self {
            db,
            tracker: Mutex::new(tracker),
        }
    }

    /// Score and record an attempt at the catalog item's canonical text.
    pub async fn record_attempt(
        &self,
        item_index: usize,
        recognized: &str,
    ) -> Result<(AttemptOutcome, MasteryProgress)> {
        let item = catalog::get(item_index)
            .ok_or_else(|| ApiError::NotFound(format!("Name {} not found", item_index)))?;

        let mut tracker = self.tracker.lock().await;
        let before = tracker.to_progress();
        let outcome = tracker.record_attempt(item_index, item.canonical_text, recognized)?;
        if let Err(error) = self.write(tracker.to_progress()).await {
            tracker.restore(before);
            return Err(error);
        }

        Ok((outcome, tracker.progress()))
    }

    /// Clear attempts, mastery and achievements.
    pub async fn reset(&self) -> Result<()> {
        let mut tracker = self.tracker.lock().await;
        let before = tracker.to_progress();
        tracker.reset();
        if let Err(error) = self.write(tracker.to_progress()).await {
            tracker.restore(before);
            return Err(error);
        }
        Ok(())
    }

    async fn write(&self, progress: PersistedProgress) -> Result<()> {
        let entries = progress.encode()?;
        self.db.put_values(&entries).await
    }

    pub async fn stats(&self) -> AttemptStats {
        self.tracker.lock().await.stats()
    }

    pub async fn progress(&self) -> MasteryProgress {
        self.tracker.lock().await.progress()
    }

    pub async fn achievements(&self) -> Vec<AchievementStatus> {
        self.tracker.lock().await.achievements()
    }

    pub async fn mastered(&self) -> BTreeSet<usize> {
        self.tracker.lock().await.mastered().clone()
    }
}
