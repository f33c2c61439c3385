//! Overall verdict from the total score and the Rajju outcome.
//!
//! Rules are tried in order and the first match wins:
//! 1. total >= 7 with Rajju passing: excellent
//! 2. total >= 5 with Rajju passing: good
//! 3. Rajju failing: Rajju mismatch, whatever the total
//! 4. otherwise: not recommended

/// Total at or above which a Rajju-passing match is excellent.
pub const EXCELLENT_THRESHOLD: f64 = 7.0;

/// Total at or above which a Rajju-passing match is good.
pub const GOOD_THRESHOLD: f64 = 5.0;

/// Final classification of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Excellent,
    Good,
    RajjuMismatch,
    NotRecommended,
}

impl Verdict {
    /// Label shown in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match (Uthamam)",
            Self::Good => "Good Match (Mathiyamam)",
            Self::RajjuMismatch => "Rajju Mismatch (Athamam)",
            Self::NotRecommended => "Not Recommended",
        }
    }

    /// Preference order when ranking candidates, 0 being best.
    ///
    /// A Rajju mismatch vetoes the match and ranks below a weak total.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Excellent => 0,
            Self::Good => 1,
            Self::NotRecommended => 2,
            Self::RajjuMismatch => 3,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Verdict {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Derive the verdict from the summed score and the Rajju rule's score.
pub fn verdict_for(total_score: f64, rajju_score: f64) -> Verdict {
    let rajju_passed = rajju_score >= 1.0;
    if total_score >= EXCELLENT_THRESHOLD && rajju_passed {
        Verdict::Excellent
    } else if total_score >= GOOD_THRESHOLD && rajju_passed {
        Verdict::Good
    } else if rajju_score <= 0.0 {
        Verdict::RajjuMismatch
    } else {
        Verdict::NotRecommended
    }
}
