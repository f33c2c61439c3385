//! Match report assembly and the public matching entry points.

use crate::config::MatchConfig;
use crate::distance::count_from_bride_to_groom;
use crate::error::PoruthamError;
use crate::nakshatra::{ALL_NAKSHATRAS, Nakshatra};
use crate::porutham::{ALL_PORUTHAMS, Porutham, PoruthamResult};
use crate::registry::{NakshatraRecord, find_by_name, record, resolve};
use crate::verdict::{Verdict, verdict_for};

/// Highest achievable total: one point per porutham.
pub const TOTAL_POSSIBLE: f64 = 10.0;

/// Full compatibility report for one couple.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MatchReport {
    /// Sum of the ten scores, 0 to 10 in half-point steps.
    pub total_score: f64,
    pub total_possible: f64,
    /// Groom's star counted from the bride's star, 1 to 27.
    pub count: u8,
    /// One result per porutham, in [`ALL_PORUTHAMS`] order.
    pub results: [PoruthamResult; 10],
    pub verdict: Verdict,
    pub groom_star: NakshatraRecord,
    pub bride_star: NakshatraRecord,
}

impl MatchReport {
    /// Result for a single porutham.
    pub fn result(&self, porutham: Porutham) -> &PoruthamResult {
        &self.results[porutham.index()]
    }

    /// Number of poruthams that awarded their full point.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_full()).count()
    }

    pub fn rajju_passed(&self) -> bool {
        self.result(Porutham::Rajju).is_full()
    }
}

/// Which side of the match a star belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Groom,
    Bride,
}

/// Match two star names with the legacy behavior: unknown names silently
/// resolve to the default star and lords are compared by identity.
///
/// Never fails.
pub fn calculate_compatibility(groom_star: &str, bride_star: &str) -> MatchReport {
    let groom = find_by_name(groom_star);
    let bride = find_by_name(bride_star);
    build_report(groom, bride, &MatchConfig::legacy())
}

/// Match two star names under an explicit configuration.
///
/// Fails only when `config.unknown_star` is strict and a name is not in
/// the registry.
pub fn calculate_compatibility_with(
    groom_star: &str,
    bride_star: &str,
    config: &MatchConfig,
) -> Result<MatchReport, PoruthamError> {
    let groom = resolve(groom_star, config.unknown_star)?;
    let bride = resolve(bride_star, config.unknown_star)?;
    Ok(build_report(groom, bride, config))
}

/// Match two already-resolved stars.
pub fn match_nakshatras(groom: Nakshatra, bride: Nakshatra, config: &MatchConfig) -> MatchReport {
    build_report(record(groom), record(bride), config)
}

/// Match one star against every star of the opposite role.
///
/// Sorted best first: verdict, then total score, then wheel order of the
/// candidate.
pub fn rank_partners(star: Nakshatra, role: Role, config: &MatchConfig) -> Vec<MatchReport> {
    let mut reports: Vec<MatchReport> = ALL_NAKSHATRAS
        .iter()
        .map(|&candidate| match role {
            Role::Groom => match_nakshatras(star, candidate, config),
            Role::Bride => match_nakshatras(candidate, star, config),
        })
        .collect();

    // Stable sort keeps wheel order among ties.
    reports.sort_by(|a, b| {
        a.verdict
            .rank()
            .cmp(&b.verdict.rank())
            .then_with(|| b.total_score.total_cmp(&a.total_score))
    });
    reports
}

fn build_report(
    groom: &NakshatraRecord,
    bride: &NakshatraRecord,
    config: &MatchConfig,
) -> MatchReport {
    let count = count_from_bride_to_groom(bride.nakshatra, groom.nakshatra);
    let results = ALL_PORUTHAMS.map(|p| p.evaluate(groom, bride, count, config.lord_scoring));
    let total_score: f64 = results.iter().map(|r| r.score).sum();
    let verdict = verdict_for(total_score, results[Porutham::Rajju.index()].score);

    tracing::debug!(
        groom = groom.name,
        bride = bride.name,
        count,
        total_score,
        verdict = verdict.label(),
        "porutham match"
    );

    MatchReport {
        total_score,
        total_possible: TOTAL_POSSIBLE,
        count,
        results,
        verdict,
        groom_star: *groom,
        bride_star: *bride,
    }
}
