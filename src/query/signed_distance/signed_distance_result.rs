use crate::GeometryId;
use na::{Point3, Vector3};
use simba::scalar::RealField;
use std::mem;

/// The result of a signed-distance query between two geometries, A and B.
///
/// The record names the two geometries by [`GeometryId`], carries the witness
/// points `witness_a` and `witness_b` on the surfaces of A and B, the signed
/// distance between them, and `normal_b_to_a`, a direction of fastest
/// increasing distance pointing outward from B's surface toward A.
///
/// - When A and B are separated, `distance > 0`.
/// - When A and B are touching or penetrating, `distance <= 0`.
/// - The A-to-B direction is, by definition, `-normal_b_to_a`. It is derived,
///   never stored.
/// - Mapping both witness points into the world frame gives
///   `world(witness_a) - world(witness_b) = distance * normal_b_to_a`
///   whenever the normal is well-defined.
///
/// Each witness point is expressed in its own geometry's local frame while the
/// normal is expressed in the world frame. This asymmetry is deliberate: a
/// consumer that knows each geometry's pose can map the points lazily, and
/// when a single rigid body owns both geometries no world-frame round-trip is
/// needed at all. The record performs no frame conversion itself.
///
/// For some shape pairs that are exactly touching, the producing algorithm
/// cannot certify a correct direction of fastest increasing distance. Rather
/// than fabricate one, it stores the NaN sentinel returned by
/// [`SignedDistanceResult::undefined_normal`]. Consumers must call
/// [`SignedDistanceResult::is_normal_defined`] before relying on the
/// direction. Whether the producer's normal is unique across all closest-point
/// pairs is documented at the producer's API, not recorded here.
///
/// The scalar type `T` may be `f32`, `f64`, or any other
/// [`RealField`](simba::scalar::RealField) implementor, e.g. an
/// automatic-differentiation scalar.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct SignedDistanceResult<T: RealField> {
    /// The identifier of the first geometry in the pair.
    pub id_a: GeometryId,
    /// The identifier of the second geometry in the pair.
    pub id_b: GeometryId,
    /// The witness point on geometry A's surface, expressed in A's local frame.
    pub witness_a: Point3<T>,
    /// The witness point on geometry B's surface, expressed in B's local frame.
    pub witness_b: Point3<T>,
    /// The signed distance between the two witness points.
    ///
    /// If this is negative, the geometries penetrate each other.
    pub distance: T,
    /// A direction of fastest increasing distance, expressed in the world
    /// frame and pointing outward from B's surface toward A.
    ///
    /// Unit-length whenever it is well-defined; NaN-filled otherwise.
    pub normal_b_to_a: Vector3<T>,
}

impl<T: RealField> SignedDistanceResult<T> {
    /// Creates a new signed-distance result.
    ///
    /// The producer must supply either a unit-length `normal_b_to_a` or the
    /// sentinel returned by [`SignedDistanceResult::undefined_normal`]. This
    /// precondition is not checked in release builds: the record is a pure
    /// carrier and stores whatever the producer supplied.
    #[inline]
    pub fn new(
        id_a: GeometryId,
        id_b: GeometryId,
        witness_a: Point3<T>,
        witness_b: Point3<T>,
        distance: T,
        normal_b_to_a: Vector3<T>,
    ) -> Self {
        let result = SignedDistanceResult {
            id_a,
            id_b,
            witness_a,
            witness_b,
            distance,
            normal_b_to_a,
        };
        debug_assert!(
            !result.is_normal_defined()
                || relative_eq!(
                    result.normal_b_to_a.norm(),
                    na::one::<T>(),
                    epsilon = na::convert::<f64, T>(1.0e-5)
                ),
            "normal_b_to_a must be unit-length or the NaN sentinel"
        );
        result
    }

    /// The sentinel value a producer stores in `normal_b_to_a` when it cannot
    /// certify a correct direction of fastest increasing distance.
    #[inline]
    pub fn undefined_normal() -> Vector3<T> {
        Vector3::repeat(na::convert::<f64, T>(f64::NAN))
    }

    /// Checks whether `normal_b_to_a` holds an actual direction rather than
    /// the NaN sentinel.
    #[inline]
    #[allow(clippy::eq_op)] // NaN is the only value that is not equal to itself.
    pub fn is_normal_defined(&self) -> bool {
        self.normal_b_to_a.iter().all(|n| *n == *n)
    }

    /// Swaps the interpretation of geometries A and B.
    ///
    /// Exchanges `id_a` with `id_b` and `witness_a` with `witness_b`, and
    /// negates `normal_b_to_a` so it points outward from the new B. The signed
    /// distance is symmetric in the pair and is left untouched.
    #[inline]
    pub fn swap_participants(&mut self) {
        mem::swap(&mut self.id_a, &mut self.id_b);
        mem::swap(&mut self.witness_a, &mut self.witness_b);
        self.normal_b_to_a.neg_mut();
    }
}

impl<T: RealField> Default for SignedDistanceResult<T> {
    /// A zero-valued placeholder carrying no meaningful query outcome,
    /// intended only to be overwritten by assignment.
    fn default() -> Self {
        SignedDistanceResult {
            id_a: GeometryId::default(),
            id_b: GeometryId::default(),
            witness_a: Point3::origin(),
            witness_b: Point3::origin(),
            distance: na::zero(),
            normal_b_to_a: Vector3::zeros(),
        }
    }
}
