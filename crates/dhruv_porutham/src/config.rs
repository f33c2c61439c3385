//! Configuration for compatibility matching.

/// What to do when a star name is not in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnknownStarPolicy {
    /// Substitute the default star (Aswini) and log a warning.
    #[default]
    Fallback,
    /// Return [`PoruthamError::UnknownStar`](crate::PoruthamError::UnknownStar).
    Strict,
}

/// How the Rasi Adhipathi porutham compares the two lords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LordScoring {
    /// 1 when both lords are the same graha, 0.5 otherwise.
    #[default]
    SameLord,
    /// Natural friendship table: 1 for the same lord or mutual friends,
    /// 0 when either regards the other as an enemy, 0.5 otherwise.
    Friendship,
}

/// Parameters for [`calculate_compatibility_with`](crate::calculate_compatibility_with).
///
/// The default reproduces the legacy behavior exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchConfig {
    /// Handling of unrecognized star names. Default: fallback.
    pub unknown_star: UnknownStarPolicy,
    /// Rasi Adhipathi scoring. Default: same lord.
    pub lord_scoring: LordScoring,
}

impl MatchConfig {
    /// Legacy behavior: silent fallback and same-lord scoring.
    pub fn legacy() -> Self {
        Self::default()
    }

    /// Reject unknown star names, otherwise legacy scoring.
    pub fn strict() -> Self {
        Self {
            unknown_star: UnknownStarPolicy::Strict,
            ..Self::default()
        }
    }

    /// Same config with a different lord scoring.
    pub fn with_lord_scoring(self, lord_scoring: LordScoring) -> Self {
        Self {
            lord_scoring,
            ..self
        }
    }
}
