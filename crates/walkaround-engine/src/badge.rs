//! Score badges
//!
//! Each tier's lower bound is inclusive: 80 is good, 55 is warning.

use crate::scoring::Percent;
use serde::Serialize;

/// Lowest score in the good tier
pub const GOOD_FROM: u8 = 80;
/// Lowest score in the warning tier
pub const WARNING_FROM: u8 = 55;

/// Placeholder label for a missing score
pub const NO_SCORE_LABEL: &str = "—";

/// Colour tier of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// No score yet
    Neutral,
    /// `>= 80`
    Good,
    /// `55..80`
    Warning,
    /// `< 55`
    Critical,
}

impl Tier {
    /// Lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Display label plus tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// `"72%"` or `"—"`
    pub label: String,
    /// Colour tier
    pub tier: Tier,
}

/// Badge for an optional score
#[must_use]
pub fn score_badge(score: Option<Percent>) -> Badge {
    match score {
        None => Badge {
            label: NO_SCORE_LABEL.to_string(),
            tier: Tier::Neutral,
        },
        Some(p) => {
            let tier = match p.value() {
                v if v >= GOOD_FROM => Tier::Good,
                v if v >= WARNING_FROM => Tier::Warning,
                _ => Tier::Critical,
            };
            Badge {
                label: p.to_string(),
                tier,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(v: u8) -> Tier {
        score_badge(Some(Percent::new(v))).tier
    }

    #[test]
    fn missing_score_is_neutral_dash() {
        let badge = score_badge(None);
        assert_eq!(badge.label, "—");
        assert_eq!(badge.tier, Tier::Neutral);
    }

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(tier(100), Tier::Good);
        assert_eq!(tier(80), Tier::Good);
        assert_eq!(tier(79), Tier::Warning);
        assert_eq!(tier(55), Tier::Warning);
        assert_eq!(tier(54), Tier::Critical);
        assert_eq!(tier(0), Tier::Critical);
    }

    #[test]
    fn label_is_percentage() {
        assert_eq!(score_badge(Some(Percent::new(67))).label, "67%");
    }
}
