mod fuzzy;
mod normalize;
mod ranking;

pub use fuzzy::{fuzzy_match, strict_match};
pub use normalize::normalize;
pub use ranking::{MatchMode, RankedWindow, rank, rank_ids};
