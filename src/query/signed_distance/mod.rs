//! Result of a pairwise signed-distance query.

pub use self::signed_distance_result::SignedDistanceResult;

mod signed_distance_result;
