//! Progress and mastery tracking for single-item practice.

use crate::achievements::{current_streak, AchievementId, AchievementStatus};
use crate::error::TrackerError;
use crate::matching::{score, Feedback};
use crate::store::PersistedProgress;
use crate::types::{
    Attempt, AttemptStats, MasteryProgress, Tier, TierProgress, CATALOG_SIZE, TIER_SIZE,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// State change emitted by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    AttemptRecorded { item_index: usize, accuracy: u8 },
    ItemMastered { item_index: usize, tier: Tier },
    AchievementUnlocked { id: AchievementId },
    ProgressReset,
}

/// Subscriber for tracker events.
pub trait ProgressObserver: Send {
    fn notify(&mut self, event: &ProgressEvent);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&ProgressEvent) + Send,
{
    fn notify(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// What a single recorded attempt changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptOutcome {
    pub attempt: Attempt,
    pub feedback: Feedback,
    pub newly_mastered: bool,
    pub unlocked: Vec<AchievementId>,
}

/// Attempt log, mastery set and unlocked achievements.
#[derive(Default)]
pub struct Tracker {
    attempts: Vec<Attempt>,
    mastered: BTreeSet<usize>,
    unlocked: BTreeSet<AchievementId>,
    observers: Vec<Box<dyn ProgressObserver>>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from previously persisted progress.
    ///
    /// Mastered indices outside the catalog are dropped. Achievements that
    /// the loaded state already satisfies are unlocked silently.
    pub fn from_progress(progress: PersistedProgress) -> Self {
        let mastered: BTreeSet<usize> = progress
            .mastered
            .into_iter()
            .filter(|&i| i < CATALOG_SIZE)
            .collect();

        let mut tracker = Self {
            attempts: progress.attempts,
            mastered,
            unlocked: progress.unlocked.into_iter().collect(),
            observers: Vec::new(),
        };
        tracker.evaluate_achievements();
        tracker
    }

    /// Put back state taken with [`Tracker::to_progress`], keeping observers.
    ///
    /// Nothing is emitted.
    pub fn restore(&mut self, progress: PersistedProgress) {
        let observers = std::mem::take(&mut self.observers);
        *self = Self::from_progress(progress);
        self.observers = observers;
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: ProgressObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Score `recognized` against `target` and record the attempt for `item_index`.
    pub fn record_attempt(
        &mut self,
        item_index: usize,
        target: &str,
        recognized: &str,
    ) -> Result<AttemptOutcome, TrackerError> {
        self.record_attempt_at(item_index, target, recognized, Utc::now())
    }

    /// Same as [`Tracker::record_attempt`] with an explicit timestamp.
    pub fn record_attempt_at(
        &mut self,
        item_index: usize,
        target: &str,
        recognized: &str,
        now: DateTime<Utc>,
    ) -> Result<AttemptOutcome, TrackerError> {
        if item_index >= CATALOG_SIZE {
            return Err(TrackerError::ItemOutOfRange { index: item_index });
        }

        let accuracy = score(target, recognized);
        let tier = Tier::for_index(item_index);
        let attempt = Attempt {
            item_index,
            target_text: target.to_string(),
            recognized_text: recognized.to_string(),
            accuracy,
            timestamp: now,
            tier,
        };
        self.attempts.push(attempt.clone());
        self.emit(ProgressEvent::AttemptRecorded {
            item_index,
            accuracy,
        });

        let newly_mastered =
            accuracy >= tier.mastery_threshold() && self.mastered.insert(item_index);
        if newly_mastered {
            self.emit(ProgressEvent::ItemMastered { item_index, tier });
        }

        let unlocked = self.evaluate_achievements();
        for id in &unlocked {
            self.emit(ProgressEvent::AchievementUnlocked { id: *id });
        }

        Ok(AttemptOutcome {
            attempt,
            feedback: Feedback::for_accuracy(accuracy),
            newly_mastered,
            unlocked,
        })
    }

    /// Clear attempts, mastery and achievements.
    pub fn reset(&mut self) {
        self.attempts.clear();
        self.mastered.clear();
        self.unlocked.clear();
        self.emit(ProgressEvent::ProgressReset);
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn mastered(&self) -> &BTreeSet<usize> {
        &self.mastered
    }

    pub fn is_mastered(&self, item_index: usize) -> bool {
        self.mastered.contains(&item_index)
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    pub fn stats(&self) -> AttemptStats {
        if self.attempts.is_empty() {
            return AttemptStats::default();
        }

        let total_attempts = self.attempts.len();
        let count = total_attempts as u64;
        let sum: u64 = self.attempts.iter().map(|a| u64::from(a.accuracy)).sum();
        let best_score = self.attempts.iter().map(|a| a.accuracy).max().unwrap_or(0);

        AttemptStats {
            total_attempts,
            average_accuracy: ((sum * 2 + count) / (2 * count)) as u8,
            best_score,
            current_streak: current_streak(&self.attempts),
        }
    }

    pub fn progress(&self) -> MasteryProgress {
        let mastered = self.mastered.len();
        let tiers = Tier::ALL
            .into_iter()
            .map(|tier| TierProgress {
                tier,
                mastered: self.mastered.range(tier.indices()).count(),
                total: TIER_SIZE,
                threshold: tier.mastery_threshold(),
            })
            .collect();

        MasteryProgress {
            mastered,
            total: CATALOG_SIZE,
            percentage: ((mastered * 200 + CATALOG_SIZE) / (2 * CATALOG_SIZE)) as u8,
            tiers,
        }
    }

    /// Every achievement with its unlock flag.
    pub fn achievements(&self) -> Vec<AchievementStatus> {
        AchievementId::ALL
            .into_iter()
            .map(|id| AchievementStatus {
                definition: *id.definition(),
                unlocked: self.unlocked.contains(&id),
            })
            .collect()
    }

    /// Current state in its persisted shape.
    pub fn to_progress(&self) -> PersistedProgress {
        PersistedProgress {
            attempts: self.attempts.clone(),
            mastered: self.mastered.iter().copied().collect(),
            unlocked: self.unlocked.iter().copied().collect(),
        }
    }

    /// Unlock every newly satisfied achievement, returning the new ones.
    fn evaluate_achievements(&mut self) -> Vec<AchievementId> {
        let mut newly = Vec::new();
        for id in AchievementId::ALL {
            if !self.unlocked.contains(&id) && id.is_satisfied(&self.attempts, &self.mastered) {
                self.unlocked.insert(id);
                newly.push(id);
            }
        }
        newly
    }

    fn emit(&mut self, event: ProgressEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}
