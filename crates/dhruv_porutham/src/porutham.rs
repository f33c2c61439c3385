//! The ten poruthams (compatibility rules) and their evaluators.
//!
//! Each rule scores 0, 0.5 or 1 and labels the result with its own status
//! thresholds. `count` is the position of the groom's star counted forward
//! from the bride's star, see [`count_from_bride_to_groom`].
//!
//! Several rules reproduce long-standing simplifications of the matching
//! tables this engine replaces:
//! - Gana only penalizes a Rakshasa groom with a non-Rakshasa bride; the
//!   mirrored case scores as medium.
//! - Yoni, Rasi and Rasi Adhipathi (same-lord scoring) never score poor.
//! - Vasiya is a constant 0.5.
//!
//! [`count_from_bride_to_groom`]: crate::distance::count_from_bride_to_groom

use crate::attributes::Gana;
use crate::config::LordScoring;
use crate::graha::{NaisargikaMaitri, naisargika_maitri};
use crate::registry::{NakshatraRecord, is_vedhai};

/// Counts that satisfy Dina porutham.
pub const DINA_COUNTS: [u8; 12] = [2, 4, 6, 8, 9, 11, 13, 15, 18, 20, 24, 26];

/// Counts that satisfy Mahendra porutham.
pub const MAHENDRA_COUNTS: [u8; 8] = [4, 7, 10, 13, 16, 19, 22, 25];

/// Every rule awards at most one point.
pub const MAX_SCORE: f64 = 1.0;

/// The ten poruthams, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Porutham {
    Dina,
    Gana,
    Mahendra,
    SthreeDeergam,
    Yoni,
    Rasi,
    RasiAdhipathi,
    Vasiya,
    Rajju,
    Vedhai,
}

/// All ten poruthams in the fixed order they appear in a report.
pub const ALL_PORUTHAMS: [Porutham; 10] = [
    Porutham::Dina,
    Porutham::Gana,
    Porutham::Mahendra,
    Porutham::SthreeDeergam,
    Porutham::Yoni,
    Porutham::Rasi,
    Porutham::RasiAdhipathi,
    Porutham::Vasiya,
    Porutham::Rajju,
    Porutham::Vedhai,
];

impl Porutham {
    /// Display name of the rule.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dina => "Dina",
            Self::Gana => "Gana",
            Self::Mahendra => "Mahendra",
            Self::SthreeDeergam => "Sthree Deergam",
            Self::Yoni => "Yoni",
            Self::Rasi => "Rasi",
            Self::RasiAdhipathi => "Rasi Adhipathi",
            Self::Vasiya => "Vasiya",
            Self::Rajju => "Rajju",
            Self::Vedhai => "Vedhai",
        }
    }

    /// What the rule measures.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Dina => "Health and prosperity",
            Self::Gana => "Temperament compatibility",
            Self::Mahendra => "Progeny and wealth",
            Self::SthreeDeergam => "Wellbeing of the bride",
            Self::Yoni => "Intimacy compatibility",
            Self::Rasi => "Family unity",
            Self::RasiAdhipathi => "Friendship of ruling lords",
            Self::Vasiya => "Mutual attraction",
            Self::Rajju => "Vital compatibility",
            Self::Vedhai => "Freedom from affliction",
        }
    }

    /// 0-based position in [`ALL_PORUTHAMS`].
    pub const fn index(self) -> usize {
        match self {
            Self::Dina => 0,
            Self::Gana => 1,
            Self::Mahendra => 2,
            Self::SthreeDeergam => 3,
            Self::Yoni => 4,
            Self::Rasi => 5,
            Self::RasiAdhipathi => 6,
            Self::Vasiya => 7,
            Self::Rajju => 8,
            Self::Vedhai => 9,
        }
    }

    /// Run this rule for a couple.
    pub fn evaluate(
        self,
        groom: &NakshatraRecord,
        bride: &NakshatraRecord,
        count: u8,
        lord_scoring: LordScoring,
    ) -> PoruthamResult {
        match self {
            Self::Dina => dina(count),
            Self::Gana => gana(groom, bride),
            Self::Mahendra => mahendra(count),
            Self::SthreeDeergam => sthree_deergam(count),
            Self::Yoni => yoni(groom, bride),
            Self::Rasi => rasi(groom, bride),
            Self::RasiAdhipathi => rasi_adhipathi(groom, bride, lord_scoring),
            Self::Vasiya => vasiya(),
            Self::Rajju => rajju(groom, bride),
            Self::Vedhai => vedhai(groom, bride),
        }
    }
}

/// Qualitative outcome of a single porutham.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PoruthamStatus {
    /// Excellent.
    Uthamam,
    /// Medium.
    Mathiyamam,
    /// Poor.
    Athamam,
}

impl PoruthamStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uthamam => "Uthamam",
            Self::Mathiyamam => "Mathiyamam",
            Self::Athamam => "Athamam",
        }
    }
}

/// Outcome of one porutham for one couple.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PoruthamResult {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub porutham: Porutham,
    /// Rule name.
    pub name: &'static str,
    /// 0, 0.5 or 1.
    pub score: f64,
    /// Always [`MAX_SCORE`].
    pub max_score: f64,
    pub status: PoruthamStatus,
    pub description: &'static str,
}

impl PoruthamResult {
    fn new(porutham: Porutham, score: f64, status: PoruthamStatus) -> Self {
        Self {
            porutham,
            name: porutham.name(),
            score,
            max_score: MAX_SCORE,
            status,
            description: porutham.description(),
        }
    }

    /// Whether the rule awarded its full point.
    pub fn is_full(&self) -> bool {
        self.score >= self.max_score
    }
}

/// Full point or nothing.
fn pass_fail(porutham: Porutham, pass: bool) -> PoruthamResult {
    if pass {
        PoruthamResult::new(porutham, 1.0, PoruthamStatus::Uthamam)
    } else {
        PoruthamResult::new(porutham, 0.0, PoruthamStatus::Athamam)
    }
}

/// Full point or half.
fn full_or_half(porutham: Porutham, full: bool) -> PoruthamResult {
    if full {
        PoruthamResult::new(porutham, 1.0, PoruthamStatus::Uthamam)
    } else {
        PoruthamResult::new(porutham, 0.5, PoruthamStatus::Mathiyamam)
    }
}

pub fn dina(count: u8) -> PoruthamResult {
    pass_fail(Porutham::Dina, DINA_COUNTS.contains(&count))
}

/// Same gana scores 1, Deva with Manusha 0.5, a Rakshasa groom with a
/// non-Rakshasa bride 0, and everything else 0.5.
pub fn gana(groom: &NakshatraRecord, bride: &NakshatraRecord) -> PoruthamResult {
    let p = Porutham::Gana;
    match (groom.gana, bride.gana) {
        (g, b) if g == b => PoruthamResult::new(p, 1.0, PoruthamStatus::Uthamam),
        (Gana::Deva, Gana::Manusha) | (Gana::Manusha, Gana::Deva) => {
            PoruthamResult::new(p, 0.5, PoruthamStatus::Mathiyamam)
        }
        (Gana::Rakshasa, _) => PoruthamResult::new(p, 0.0, PoruthamStatus::Athamam),
        _ => PoruthamResult::new(p, 0.5, PoruthamStatus::Mathiyamam),
    }
}

pub fn mahendra(count: u8) -> PoruthamResult {
    pass_fail(Porutham::Mahendra, MAHENDRA_COUNTS.contains(&count))
}

/// Tiered on distance: 13 or more is full, 7 to 12 is half.
pub fn sthree_deergam(count: u8) -> PoruthamResult {
    let p = Porutham::SthreeDeergam;
    if count >= 13 {
        PoruthamResult::new(p, 1.0, PoruthamStatus::Uthamam)
    } else if count >= 7 {
        PoruthamResult::new(p, 0.5, PoruthamStatus::Mathiyamam)
    } else {
        PoruthamResult::new(p, 0.0, PoruthamStatus::Athamam)
    }
}

pub fn yoni(groom: &NakshatraRecord, bride: &NakshatraRecord) -> PoruthamResult {
    full_or_half(Porutham::Yoni, groom.yoni == bride.yoni)
}

pub fn rasi(groom: &NakshatraRecord, bride: &NakshatraRecord) -> PoruthamResult {
    full_or_half(Porutham::Rasi, groom.rashi == bride.rashi)
}

pub fn rasi_adhipathi(
    groom: &NakshatraRecord,
    bride: &NakshatraRecord,
    lord_scoring: LordScoring,
) -> PoruthamResult {
    let p = Porutham::RasiAdhipathi;
    if groom.lord == bride.lord {
        return PoruthamResult::new(p, 1.0, PoruthamStatus::Uthamam);
    }
    match lord_scoring {
        LordScoring::SameLord => PoruthamResult::new(p, 0.5, PoruthamStatus::Mathiyamam),
        LordScoring::Friendship => {
            let towards_bride = naisargika_maitri(groom.lord, bride.lord);
            let towards_groom = naisargika_maitri(bride.lord, groom.lord);
            match (towards_bride, towards_groom) {
                (NaisargikaMaitri::Friend, NaisargikaMaitri::Friend) => {
                    PoruthamResult::new(p, 1.0, PoruthamStatus::Uthamam)
                }
                (NaisargikaMaitri::Enemy, _) | (_, NaisargikaMaitri::Enemy) => {
                    PoruthamResult::new(p, 0.0, PoruthamStatus::Athamam)
                }
                _ => PoruthamResult::new(p, 0.5, PoruthamStatus::Mathiyamam),
            }
        }
    }
}

/// Constant medium score. Rashi-pair attraction tables are not modelled.
pub fn vasiya() -> PoruthamResult {
    PoruthamResult::new(Porutham::Vasiya, 0.5, PoruthamStatus::Mathiyamam)
}

/// Passes only when the two stars sit on different rajjus.
pub fn rajju(groom: &NakshatraRecord, bride: &NakshatraRecord) -> PoruthamResult {
    pass_fail(Porutham::Rajju, groom.rajju != bride.rajju)
}

pub fn vedhai(groom: &NakshatraRecord, bride: &NakshatraRecord) -> PoruthamResult {
    pass_fail(Porutham::Vedhai, !is_vedhai(groom, bride))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::Nakshatra;
    use crate::registry::record;

    fn r(n: Nakshatra) -> &'static NakshatraRecord {
        record(n)
    }

    #[test]
    fn order_matches_index() {
        for (i, p) in ALL_PORUTHAMS.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn dina_counts() {
        for c in 1..=27u8 {
            let res = dina(c);
            if DINA_COUNTS.contains(&c) {
                assert_eq!(res.score, 1.0, "count {c}");
                assert_eq!(res.status, PoruthamStatus::Uthamam);
            } else {
                assert_eq!(res.score, 0.0, "count {c}");
                assert_eq!(res.status, PoruthamStatus::Athamam);
            }
        }
        assert_eq!(dina(1).score, 0.0);
        assert_eq!(dina(27).score, 0.0);
    }

    #[test]
    fn mahendra_counts() {
        assert_eq!(mahendra(4).score, 1.0);
        assert_eq!(mahendra(25).score, 1.0);
        assert_eq!(mahendra(1).score, 0.0);
        assert_eq!(mahendra(27).status, PoruthamStatus::Athamam);
    }

    #[test]
    fn sthree_deergam_tiers() {
        assert_eq!(sthree_deergam(1).score, 0.0);
        assert_eq!(sthree_deergam(6).score, 0.0);
        assert_eq!(sthree_deergam(7).score, 0.5);
        assert_eq!(sthree_deergam(7).status, PoruthamStatus::Mathiyamam);
        assert_eq!(sthree_deergam(12).score, 0.5);
        assert_eq!(sthree_deergam(13).score, 1.0);
        assert_eq!(sthree_deergam(27).status, PoruthamStatus::Uthamam);
    }

    #[test]
    fn gana_same() {
        let res = gana(r(Nakshatra::Aswini), r(Nakshatra::Hasta));
        assert_eq!(res.score, 1.0);
        assert_eq!(res.status, PoruthamStatus::Uthamam);
    }

    #[test]
    fn gana_deva_manusha_either_order() {
        assert_eq!(gana(r(Nakshatra::Aswini), r(Nakshatra::Bharani)).score, 0.5);
        assert_eq!(gana(r(Nakshatra::Bharani), r(Nakshatra::Aswini)).score, 0.5);
    }

    #[test]
    fn gana_rakshasa_groom_penalized() {
        // Krittika is Rakshasa, Aswini Deva.
        let res = gana(r(Nakshatra::Krittika), r(Nakshatra::Aswini));
        assert_eq!(res.score, 0.0);
        assert_eq!(res.status, PoruthamStatus::Athamam);
        assert_eq!(gana(r(Nakshatra::Krittika), r(Nakshatra::Bharani)).score, 0.0);
    }

    #[test]
    fn gana_rakshasa_bride_is_medium() {
        let res = gana(r(Nakshatra::Aswini), r(Nakshatra::Krittika));
        assert_eq!(res.score, 0.5);
        assert_eq!(res.status, PoruthamStatus::Mathiyamam);
        assert_eq!(gana(r(Nakshatra::Bharani), r(Nakshatra::Krittika)).score, 0.5);
    }

    #[test]
    fn yoni_never_poor() {
        assert_eq!(yoni(r(Nakshatra::Rohini), r(Nakshatra::Mrigashira)).score, 1.0);
        let res = yoni(r(Nakshatra::Aswini), r(Nakshatra::Bharani));
        assert_eq!(res.score, 0.5);
        assert_eq!(res.status, PoruthamStatus::Mathiyamam);
    }

    #[test]
    fn rasi_same_sign() {
        assert_eq!(rasi(r(Nakshatra::Aswini), r(Nakshatra::Bharani)).score, 1.0);
        assert_eq!(rasi(r(Nakshatra::Aswini), r(Nakshatra::Rohini)).score, 0.5);
    }

    #[test]
    fn rasi_adhipathi_same_lord() {
        // Aswini and Magha are both ruled by Ketu.
        let same = LordScoring::SameLord;
        let res = rasi_adhipathi(r(Nakshatra::Aswini), r(Nakshatra::Magha), same);
        assert_eq!(res.score, 1.0);
        let res = rasi_adhipathi(r(Nakshatra::Aswini), r(Nakshatra::Bharani), same);
        assert_eq!(res.score, 0.5);
        assert_eq!(res.status, PoruthamStatus::Mathiyamam);
    }

    #[test]
    fn rasi_adhipathi_friendship() {
        let f = LordScoring::Friendship;
        // Sun (Krittika) and Moon (Rohini) are mutual friends.
        assert_eq!(rasi_adhipathi(r(Nakshatra::Krittika), r(Nakshatra::Rohini), f).score, 1.0);
        // Sun and Venus (Bharani) are enemies.
        let res = rasi_adhipathi(r(Nakshatra::Krittika), r(Nakshatra::Bharani), f);
        assert_eq!(res.score, 0.0);
        assert_eq!(res.status, PoruthamStatus::Athamam);
        // Moon is neutral to Mars (Mrigashira), Mars friendly to Moon.
        assert_eq!(rasi_adhipathi(r(Nakshatra::Rohini), r(Nakshatra::Mrigashira), f).score, 0.5);
        // Ketu is neutral to everyone.
        assert_eq!(rasi_adhipathi(r(Nakshatra::Aswini), r(Nakshatra::Bharani), f).score, 0.5);
        // Same lord still wins outright.
        assert_eq!(rasi_adhipathi(r(Nakshatra::Aswini), r(Nakshatra::Moola), f).score, 1.0);
    }

    #[test]
    fn vasiya_constant() {
        let res = vasiya();
        assert_eq!(res.score, 0.5);
        assert_eq!(res.status, PoruthamStatus::Mathiyamam);
    }

    #[test]
    fn rajju_same_fails() {
        let res = rajju(r(Nakshatra::Aswini), r(Nakshatra::Magha));
        assert_eq!(res.score, 0.0);
        assert_eq!(res.status, PoruthamStatus::Athamam);
        assert_eq!(rajju(r(Nakshatra::Aswini), r(Nakshatra::Bharani)).score, 1.0);
    }

    #[test]
    fn vedhai_both_directions() {
        let a = r(Nakshatra::Bharani);
        let b = r(Nakshatra::Anuradha);
        assert_eq!(vedhai(a, b).score, 0.0);
        assert_eq!(vedhai(b, a).score, 0.0);
        assert_eq!(vedhai(a, b).status, PoruthamStatus::Athamam);
        assert_eq!(vedhai(a, r(Nakshatra::Rohini)).score, 1.0);
    }

    #[test]
    fn mrigashira_triad() {
        let m = r(Nakshatra::Mrigashira);
        let c = r(Nakshatra::Chitra);
        let d = r(Nakshatra::Dhanishta);
        assert_eq!(vedhai(m, c).score, 0.0);
        assert_eq!(vedhai(d, m).score, 0.0);
        assert_eq!(vedhai(c, d).score, 0.0);
    }

    #[test]
    fn evaluate_dispatches_by_variant() {
        let g = r(Nakshatra::Aswini);
        let b = r(Nakshatra::Bharani);
        for p in ALL_PORUTHAMS {
            let res = p.evaluate(g, b, 27, LordScoring::SameLord);
            assert_eq!(res.porutham, p);
            assert_eq!(res.name, p.name());
            assert_eq!(res.description, p.description());
            assert_eq!(res.max_score, MAX_SCORE);
        }
    }
}
