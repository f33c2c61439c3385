//! Nakshatra porutham: birth-star compatibility matching.
//!
//! This crate provides:
//! - The 27-star registry with rashi, gana, yoni, rajju, vedhai and lord
//! - The ten classical poruthams (Dina through Vedhai)
//! - An aggregate score and verdict, with Rajju acting as a veto
//!
//! Everything is a pure function over a static table; reports are built
//! fresh on every call and share no state.
//!
//! ```
//! use dhruv_porutham::{Verdict, calculate_compatibility};
//!
//! let report = calculate_compatibility("Aswini", "Bharani");
//! assert_eq!(report.total_score, 6.0);
//! assert_eq!(report.verdict, Verdict::Good);
//! ```

pub mod attributes;
pub mod config;
pub mod distance;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod porutham;
pub mod rashi;
pub mod registry;
pub mod report;
pub mod verdict;

pub use attributes::{Gana, Rajju, Yoni};
pub use config::{LordScoring, MatchConfig, UnknownStarPolicy};
pub use distance::count_from_bride_to_groom;
pub use error::PoruthamError;
pub use graha::{Graha, NaisargikaMaitri, naisargika_maitri};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_COUNT, Nakshatra};
pub use porutham::{ALL_PORUTHAMS, Porutham, PoruthamResult, PoruthamStatus};
pub use rashi::Rashi;
pub use registry::{
    DEFAULT_NAKSHATRA, NakshatraRecord, all_records, find_by_id, find_by_name, is_vedhai, record,
    resolve, try_find_by_name,
};
pub use report::{
    MatchReport, Role, TOTAL_POSSIBLE, calculate_compatibility, calculate_compatibility_with,
    match_nakshatras, rank_partners,
};
pub use verdict::{Verdict, verdict_for};
