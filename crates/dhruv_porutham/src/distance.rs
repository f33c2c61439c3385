//! Cyclic distance between two stars on the 27-star wheel.

use crate::nakshatra::{NAKSHATRA_COUNT, Nakshatra};

/// Position of the groom's star counted forward from the bride's star,
/// with the bride's own star counted as 1. Always in `1..=27`.
///
/// Same star gives 1; the star just before the bride's gives 27.
pub fn count_from_bride_to_groom(bride: Nakshatra, groom: Nakshatra) -> u8 {
    let girl = i16::from(bride.index());
    let boy = i16::from(groom.index());
    let count = boy - girl + 1;
    if count <= 0 {
        (count + i16::from(NAKSHATRA_COUNT)) as u8
    } else {
        count as u8
    }
}
