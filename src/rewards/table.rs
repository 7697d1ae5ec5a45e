//! # Tier Progression
//!
//! Maps a points balance onto the tier table: which tier the balance sits in,
//! which tier comes next, and how far along the way there it is.
//!
//! Thresholds are inclusive on the lower end. A balance of exactly `min_points`
//! belongs to that tier. Balances below the first threshold, negative ones included,
//! sit in the first tier.

use crate::model::Tier;
use crate::rewards::RewardsError;
use serde::Serialize;

/// An ordered, non-empty tier table, strictly ascending by threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

/// Everything a profile screen needs about a balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelStatus {
    pub points: i64,
    pub current: Tier,
    pub next: Option<Tier>,
    pub progress: f64,
    pub points_to_next: Option<u64>,
}

impl TierTable {
    /// Validates and wraps `tiers`.
    ///
    /// # Errors
    /// [`RewardsError::Empty`] for no tiers, [`RewardsError::Unordered`] when a
    /// threshold does not exceed the one before it.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, RewardsError> {
        if tiers.is_empty() {
            return Err(RewardsError::Empty);
        }
        for pair in tiers.windows(2) {
            if let [previous, tier] = pair {
                if tier.min_points <= previous.min_points {
                    return Err(RewardsError::Unordered {
                        name: tier.name.clone(),
                        min_points: tier.min_points,
                        previous: previous.min_points,
                    });
                }
            }
        }
        Ok(Self { tiers })
    }

    /// The Level-Up program's built-in tiers.
    pub fn level_up() -> Self {
        Self {
            tiers: vec![
                Tier::new(1, "Bronze", 0, "#CD7F32")
                    .with_benefits(["1 point per 1,000 spent", "Birthday greeting"]),
                Tier::new(2, "Silver", 100, "#C0C0C0").with_benefits([
                    "5% off accessories",
                    "Early access to event sign-ups",
                ]),
                Tier::new(3, "Gold", 500, "#FFD700").with_benefits([
                    "10% off accessories",
                    "Free shipping",
                    "Priority event seating",
                ]),
                Tier::new(4, "Platinum", 1000, "#E5E4E2").with_benefits([
                    "15% off the whole store",
                    "Free shipping",
                    "Exclusive monthly giveaway",
                ]),
                Tier::new(5, "Diamond", 2000, "#B9F2FF").with_benefits([
                    "20% off the whole store",
                    "Free express shipping",
                    "Launch-day reservations",
                    "VIP tournament invitations",
                ]),
            ],
        }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Position of the tier holding `points`.
    fn current_index(&self, points: i64) -> usize {
        // Negative balances compare below every u64 threshold.
        let Ok(points) = u64::try_from(points) else {
            return 0;
        };
        self.tiers
            .iter()
            .rposition(|tier| tier.min_points <= points)
            .unwrap_or(0)
    }

    /// The highest tier whose threshold is at or below `points`, or the first tier.
    pub fn current_tier(&self, points: i64) -> &Tier {
        &self.tiers[self.current_index(points)]
    }

    /// The tier after [`current_tier`](Self::current_tier), or `None` at the top.
    pub fn next_tier(&self, points: i64) -> Option<&Tier> {
        self.tiers.get(self.current_index(points) + 1)
    }

    /// Fraction of the way from the current tier's threshold to the next, in [0, 1].
    ///
    /// The top tier is always fully progressed.
    pub fn progress(&self, points: i64) -> f64 {
        let current = self.current_tier(points);
        let Some(next) = self.next_tier(points) else {
            return 1.0;
        };
        let span = (next.min_points - current.min_points) as f64;
        let earned = points as f64 - current.min_points as f64;
        (earned / span).clamp(0.0, 1.0)
    }

    /// Points still needed to reach the next tier, or `None` at the top.
    pub fn points_to_next(&self, points: i64) -> Option<u64> {
        let next = self.next_tier(points)?;
        let have = u64::try_from(points).unwrap_or(0);
        Some(next.min_points.saturating_sub(have))
    }

    pub fn status(&self, points: i64) -> LevelStatus {
        LevelStatus {
            points,
            current: self.current_tier(points).clone(),
            next: self.next_tier(points).cloned(),
            progress: self.progress(points),
            points_to_next: self.points_to_next(points),
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::level_up()
    }
}
