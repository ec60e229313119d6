//! Achievement milestones.

use crate::types::{Attempt, Tier, CATALOG_SIZE, STREAK_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Achievement identifier. Serialized ids are the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    #[serde(rename = "first_attempt")]
    FirstAttempt,
    #[serde(rename = "first_master")]
    FirstMaster,
    #[serde(rename = "beginner_complete")]
    BeginnerComplete,
    #[serde(rename = "intermediate_complete")]
    IntermediateComplete,
    #[serde(rename = "advanced_complete")]
    AdvancedComplete,
    #[serde(rename = "perfect_score")]
    PerfectScore,
    #[serde(rename = "streak_10")]
    Streak10,
    #[serde(rename = "all_complete")]
    AllComplete,
}

impl AchievementId {
    /// All achievements in display order.
    pub const ALL: [AchievementId; 8] = [
        AchievementId::FirstAttempt,
        AchievementId::FirstMaster,
        AchievementId::BeginnerComplete,
        AchievementId::IntermediateComplete,
        AchievementId::AdvancedComplete,
        AchievementId::PerfectScore,
        AchievementId::Streak10,
        AchievementId::AllComplete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstAttempt => "first_attempt",
            Self::FirstMaster => "first_master",
            Self::BeginnerComplete => "beginner_complete",
            Self::IntermediateComplete => "intermediate_complete",
            Self::AdvancedComplete => "advanced_complete",
            Self::PerfectScore => "perfect_score",
            Self::Streak10 => "streak_10",
            Self::AllComplete => "all_complete",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    pub fn definition(self) -> &'static AchievementDefinition {
        &DEFINITIONS[self as usize]
    }

    /// Evaluate the milestone against current progress.
    pub fn is_satisfied(self, attempts: &[Attempt], mastered: &BTreeSet<usize>) -> bool {
        match self {
            Self::FirstAttempt => !attempts.is_empty(),
            Self::FirstMaster => !mastered.is_empty(),
            Self::BeginnerComplete => tier_complete(Tier::Beginner, mastered),
            Self::IntermediateComplete => tier_complete(Tier::Intermediate, mastered),
            Self::AdvancedComplete => tier_complete(Tier::Advanced, mastered),
            Self::PerfectScore => attempts.iter().any(|a| a.accuracy == 100),
            Self::Streak10 => current_streak(attempts) >= 10,
            Self::AllComplete => (0..CATALOG_SIZE).all(|i| mastered.contains(&i)),
        }
    }
}

/// Display metadata for an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementDefinition {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

static DEFINITIONS: [AchievementDefinition; 8] = [
    AchievementDefinition {
        id: AchievementId::FirstAttempt,
        title: "First Steps",
        description: "Made your first attempt",
        icon: "🎯",
    },
    AchievementDefinition {
        id: AchievementId::FirstMaster,
        title: "First Master",
        description: "Mastered your first name",
        icon: "🌟",
    },
    AchievementDefinition {
        id: AchievementId::BeginnerComplete,
        title: "Beginner Graduate",
        description: "Mastered all beginner names",
        icon: "🏆",
    },
    AchievementDefinition {
        id: AchievementId::IntermediateComplete,
        title: "Intermediate Scholar",
        description: "Mastered all intermediate names",
        icon: "🎓",
    },
    AchievementDefinition {
        id: AchievementId::AdvancedComplete,
        title: "Advanced Master",
        description: "Mastered all advanced names",
        icon: "👑",
    },
    AchievementDefinition {
        id: AchievementId::PerfectScore,
        title: "Perfect Pronunciation",
        description: "Achieved 100% accuracy",
        icon: "💯",
    },
    AchievementDefinition {
        id: AchievementId::Streak10,
        title: "Consistent Learner",
        description: "10 successful attempts in a row",
        icon: "🔥",
    },
    AchievementDefinition {
        id: AchievementId::AllComplete,
        title: "Grand Master",
        description: "Mastered all 99 names",
        icon: "🕌",
    },
];

/// Achievement with its unlock state, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementStatus {
    #[serde(flatten)]
    pub definition: AchievementDefinition,
    pub unlocked: bool,
}

/// Consecutive most-recent attempts at or above the streak threshold.
pub fn current_streak(attempts: &[Attempt]) -> usize {
    attempts
        .iter()
        .rev()
        .take_while(|a| a.accuracy >= STREAK_THRESHOLD)
        .count()
}

fn tier_complete(tier: Tier, mastered: &BTreeSet<usize>) -> bool {
    tier.indices().all(|i| mastered.contains(&i))
}
