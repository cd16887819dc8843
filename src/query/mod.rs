//! Non-persistent geometric query results.
//!
//! The one query covered at the moment is the pairwise signed-distance query:
//! [`SignedDistanceResult`] reports the signed separation between two
//! geometries together with the witness points realizing it and a direction
//! of fastest increasing distance.

pub use self::signed_distance::SignedDistanceResult;

pub mod signed_distance;
