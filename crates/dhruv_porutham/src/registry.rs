//! Static reference table of the 27 nakshatras and their attributes.
//!
//! The table is indexed by wheel position, so `record(n)` is a plain array
//! access. Name lookups scan the 27 canonical names without allocating.
//!
//! Vedhai pairs are declared on one side only (on the star earlier in the
//! wheel, and Mrigashira carries both of its partners). Every consumer must
//! therefore test both directions; see [`is_vedhai`].

use crate::attributes::{Gana, Rajju, Yoni};
use crate::config::UnknownStarPolicy;
use crate::error::PoruthamError;
use crate::graha::{Graha, VIMSHOTTARI_LORDS};
use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

/// Star substituted for unrecognized names: the first star in wheel order.
pub const DEFAULT_NAKSHATRA: Nakshatra = Nakshatra::Aswini;

/// Astrological attributes of one nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NakshatraRecord {
    /// 1-based wheel position.
    pub id: u8,
    /// Canonical name.
    pub name: &'static str,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub nakshatra: Nakshatra,
    pub rashi: Rashi,
    pub gana: Gana,
    pub yoni: Yoni,
    pub rajju: Rajju,
    /// Stars this one afflicts, as declared in the table (one direction only).
    pub vedhai: &'static [Nakshatra],
    /// Ruling graha, fixed by wheel position in the Vimshottari cycle.
    pub lord: Graha,
}

const fn rec(
    nakshatra: Nakshatra,
    rashi: Rashi,
    gana: Gana,
    yoni: Yoni,
    rajju: Rajju,
    vedhai: &'static [Nakshatra],
) -> NakshatraRecord {
    NakshatraRecord {
        id: nakshatra.id(),
        name: nakshatra.name(),
        nakshatra,
        rashi,
        gana,
        yoni,
        rajju,
        vedhai,
        lord: VIMSHOTTARI_LORDS[nakshatra.index() as usize % VIMSHOTTARI_LORDS.len()],
    }
}

/// The 27-row registry in wheel order.
pub static NAKSHATRA_TABLE: [NakshatraRecord; 27] = {
    use Gana::*;
    use Nakshatra as N;
    use Rashi::*;

    [
        rec(N::Aswini, Mesha, Deva, Yoni::Horse, Rajju::Pada, &[N::Jyeshta]),
        rec(N::Bharani, Mesha, Manusha, Yoni::Elephant, Rajju::Kati, &[N::Anuradha]),
        rec(N::Krittika, Vrishabha, Rakshasa, Yoni::Goat, Rajju::Udar, &[N::Vishakha]),
        rec(N::Rohini, Vrishabha, Manusha, Yoni::Serpent, Rajju::Kanta, &[N::Swati]),
        rec(N::Mrigashira, Vrishabha, Deva, Yoni::Serpent, Rajju::Siro, &[N::Chitra, N::Dhanishta]),
        rec(N::Ardra, Mithuna, Manusha, Yoni::Dog, Rajju::Kanta, &[N::Shravana]),
        rec(N::Punarvasu, Mithuna, Deva, Yoni::Cat, Rajju::Udar, &[N::UttaraAshadha]),
        rec(N::Pushya, Karka, Deva, Yoni::Goat, Rajju::Kati, &[N::PurvaAshadha]),
        rec(N::Ashlesha, Karka, Rakshasa, Yoni::Cat, Rajju::Pada, &[N::Moola]),
        rec(N::Magha, Simha, Rakshasa, Yoni::Rat, Rajju::Pada, &[N::Revati]),
        rec(N::PurvaPhalguni, Simha, Manusha, Yoni::Rat, Rajju::Kati, &[N::UttaraBhadrapada]),
        rec(N::UttaraPhalguni, Kanya, Manusha, Yoni::Cow, Rajju::Udar, &[N::PurvaBhadrapada]),
        rec(N::Hasta, Kanya, Deva, Yoni::Buffalo, Rajju::Kanta, &[N::Shatabhisha]),
        rec(N::Chitra, Kanya, Rakshasa, Yoni::Tiger, Rajju::Siro, &[N::Dhanishta]),
        rec(N::Swati, Tula, Deva, Yoni::Buffalo, Rajju::Kanta, &[]),
        rec(N::Vishakha, Tula, Rakshasa, Yoni::Tiger, Rajju::Udar, &[]),
        rec(N::Anuradha, Vrischika, Deva, Yoni::Deer, Rajju::Kati, &[]),
        rec(N::Jyeshta, Vrischika, Rakshasa, Yoni::Deer, Rajju::Pada, &[]),
        rec(N::Moola, Dhanu, Rakshasa, Yoni::Dog, Rajju::Pada, &[]),
        rec(N::PurvaAshadha, Dhanu, Manusha, Yoni::Monkey, Rajju::Kati, &[]),
        rec(N::UttaraAshadha, Makara, Manusha, Yoni::Mongoose, Rajju::Udar, &[]),
        rec(N::Shravana, Makara, Deva, Yoni::Monkey, Rajju::Kanta, &[]),
        rec(N::Dhanishta, Makara, Rakshasa, Yoni::Lion, Rajju::Siro, &[]),
        rec(N::Shatabhisha, Kumbha, Rakshasa, Yoni::Horse, Rajju::Kanta, &[]),
        rec(N::PurvaBhadrapada, Kumbha, Manusha, Yoni::Lion, Rajju::Udar, &[]),
        rec(N::UttaraBhadrapada, Meena, Manusha, Yoni::Cow, Rajju::Kati, &[]),
        rec(N::Revati, Meena, Deva, Yoni::Elephant, Rajju::Pada, &[]),
    ]
};

/// Record for a nakshatra.
pub fn record(nakshatra: Nakshatra) -> &'static NakshatraRecord {
    &NAKSHATRA_TABLE[nakshatra.index() as usize]
}

/// All 27 records in wheel order.
pub fn all_records() -> &'static [NakshatraRecord; 27] {
    &NAKSHATRA_TABLE
}

/// Look up a record by name, substituting the default star when the name
/// is not recognized.
///
/// This is the legacy lookup: a malformed name still yields a valid-looking
/// record. Use [`try_find_by_name`] to detect bad input.
pub fn find_by_name(name: &str) -> &'static NakshatraRecord {
    match Nakshatra::from_name(name) {
        Some(n) => record(n),
        None => {
            tracing::warn!(
                input = name,
                fallback = DEFAULT_NAKSHATRA.name(),
                "unknown nakshatra name, substituting default star"
            );
            record(DEFAULT_NAKSHATRA)
        }
    }
}

/// Look up a record by name, failing on unrecognized names.
pub fn try_find_by_name(name: &str) -> Result<&'static NakshatraRecord, PoruthamError> {
    Nakshatra::from_name(name)
        .map(record)
        .ok_or_else(|| PoruthamError::UnknownStar(name.to_string()))
}

/// Look up a record by its 1-based identifier.
pub fn find_by_id(id: u8) -> Result<&'static NakshatraRecord, PoruthamError> {
    Ok(record(Nakshatra::from_id(id)?))
}

/// Resolve a name under the given policy.
pub fn resolve(
    name: &str,
    policy: UnknownStarPolicy,
) -> Result<&'static NakshatraRecord, PoruthamError> {
    match policy {
        UnknownStarPolicy::Fallback => Ok(find_by_name(name)),
        UnknownStarPolicy::Strict => try_find_by_name(name),
    }
}

/// Whether either star's declared vedhai names the other.
pub fn is_vedhai(a: &NakshatraRecord, b: &NakshatraRecord) -> bool {
    a.vedhai.contains(&b.nakshatra) || b.vedhai.contains(&a.nakshatra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::ALL_NAKSHATRAS;

    #[test]
    fn table_in_wheel_order() {
        for (i, r) in NAKSHATRA_TABLE.iter().enumerate() {
            assert_eq!(r.id as usize, i + 1);
            assert_eq!(r.nakshatra, ALL_NAKSHATRAS[i]);
            assert_eq!(r.name, ALL_NAKSHATRAS[i].name());
        }
    }

    #[test]
    fn record_matches_nakshatra() {
        for n in ALL_NAKSHATRAS {
            assert_eq!(record(n).nakshatra, n);
        }
    }

    #[test]
    fn aswini_attributes() {
        let r = record(Nakshatra::Aswini);
        assert_eq!(r.id, 1);
        assert_eq!(r.rashi, Rashi::Mesha);
        assert_eq!(r.gana, Gana::Deva);
        assert_eq!(r.yoni, Yoni::Horse);
        assert_eq!(r.rajju, Rajju::Pada);
        assert_eq!(r.vedhai, &[Nakshatra::Jyeshta]);
        assert_eq!(r.lord.english_name(), "Ketu");
    }

    #[test]
    fn bharani_attributes() {
        let r = record(Nakshatra::Bharani);
        assert_eq!(r.id, 2);
        assert_eq!(r.rashi, Rashi::Mesha);
        assert_eq!(r.gana, Gana::Manusha);
        assert_eq!(r.yoni, Yoni::Elephant);
        assert_eq!(r.rajju, Rajju::Kati);
        assert_eq!(r.vedhai, &[Nakshatra::Anuradha]);
        assert_eq!(r.lord.english_name(), "Venus");
    }

    #[test]
    fn lords_repeat_every_nine_stars() {
        assert_eq!(record(Nakshatra::Rohini).lord, Graha::Chandra);
        assert_eq!(record(Nakshatra::Magha).lord, Graha::Ketu);
        assert_eq!(record(Nakshatra::Moola).lord, Graha::Ketu);
        assert_eq!(record(Nakshatra::Shatabhisha).lord, Graha::Rahu);
        assert_eq!(record(Nakshatra::Revati).lord, Graha::Buddh);
        for (a, b) in NAKSHATRA_TABLE.iter().zip(&NAKSHATRA_TABLE[9..]) {
            assert_eq!(a.lord, b.lord, "{} / {}", a.name, b.name);
        }
    }

    #[test]
    fn ganas_split_nine_each() {
        for g in [Gana::Deva, Gana::Manusha, Gana::Rakshasa] {
            assert_eq!(NAKSHATRA_TABLE.iter().filter(|r| r.gana == g).count(), 9);
        }
    }

    #[test]
    fn rajju_group_sizes() {
        let count = |rj: Rajju| NAKSHATRA_TABLE.iter().filter(|r| r.rajju == rj).count();
        assert_eq!(count(Rajju::Siro), 3);
        assert_eq!(count(Rajju::Kanta), 6);
        assert_eq!(count(Rajju::Udar), 6);
        assert_eq!(count(Rajju::Kati), 6);
        assert_eq!(count(Rajju::Pada), 6);
    }

    #[test]
    fn rashis_in_wheel_order() {
        for pair in NAKSHATRA_TABLE.windows(2) {
            assert!(pair[0].rashi <= pair[1].rashi);
        }
    }

    #[test]
    fn vedhai_never_self() {
        for r in &NAKSHATRA_TABLE {
            assert!(!r.vedhai.contains(&r.nakshatra), "{}", r.name);
            assert!(!is_vedhai(r, r));
        }
    }

    #[test]
    fn vedhai_checked_both_ways() {
        let aswini = record(Nakshatra::Aswini);
        let jyeshta = record(Nakshatra::Jyeshta);
        assert!(jyeshta.vedhai.is_empty());
        assert!(is_vedhai(aswini, jyeshta));
        assert!(is_vedhai(jyeshta, aswini));
    }

    #[test]
    fn find_by_name_known() {
        assert_eq!(find_by_name("Rohini").nakshatra, Nakshatra::Rohini);
        assert_eq!(find_by_name("Uttara Ashadha").id, 21);
    }

    #[test]
    fn find_by_name_falls_back() {
        assert_eq!(find_by_name("NotAStar").nakshatra, DEFAULT_NAKSHATRA);
        assert_eq!(find_by_name("").id, 1);
    }

    #[test]
    fn try_find_by_name_rejects_unknown() {
        assert_eq!(
            try_find_by_name("NotAStar"),
            Err(PoruthamError::UnknownStar("NotAStar".to_string()))
        );
        assert_eq!(try_find_by_name("Revati").map(|r| r.id), Ok(27));
    }

    #[test]
    fn find_by_id_bounds() {
        assert_eq!(find_by_id(18).map(|r| r.nakshatra), Ok(Nakshatra::Jyeshta));
        assert_eq!(find_by_id(0), Err(PoruthamError::InvalidId(0)));
    }

    #[test]
    fn resolve_follows_policy() {
        assert_eq!(
            resolve("Bogus", UnknownStarPolicy::Fallback).map(|r| r.nakshatra),
            Ok(DEFAULT_NAKSHATRA)
        );
        assert!(resolve("Bogus", UnknownStarPolicy::Strict).is_err());
        assert_eq!(resolve("Magha", UnknownStarPolicy::Strict).map(|r| r.id), Ok(10));
    }
}
