/*!
signed-distance
===============

**signed-distance** carries the results of signed-distance queries between
pairs of 3-dimensional geometries: the signed separation, the witness points
realizing it, and a direction of fastest increasing distance.

The closest-point computation itself lives in the producing algorithm, not
here. This crate only defines the transport contract between a producer (a
narrow-phase distance query) and its consumers (e.g., a contact solver).
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod geometry_id;
pub mod query;

pub use crate::geometry_id::GeometryId;
