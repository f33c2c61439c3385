//! Nakshatra lords and the natural friendship table between them.
//!
//! Lordship follows the Vimshottari sequence: Ketu, Shukra, Surya, Chandra,
//! Mangal, Rahu, Guru, Shani, Buddh, repeated three times around the wheel.
//!
//! Friendship is the naisargika (natural) table from BPHS. Rahu and Ketu are
//! treated as neutral to everyone, including each other.

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// Nakshatra lords in wheel order, repeating every 9 stars from Aswini.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

impl Graha {
    /// English name of the graha. This is the form shown in reports.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Graha {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.english_name())
    }
}

/// Natural relationship of one graha towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// How `graha` regards `other` in the natural friendship table.
///
/// The relation is not symmetric: the Moon is neutral to Mars while Mars
/// counts the Moon a friend.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        (Chandra, Surya | Buddh) => Friend,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}
