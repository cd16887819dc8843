//! Opaque identifiers naming registered geometries.

/// An opaque identifier naming a registered geometry.
///
/// Identifiers are allocated by whatever registry owns the geometries; this
/// crate never mints them and never maps them back to shapes. It only carries
/// them through query results so consumers can tell the two participants of a
/// pair apart.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GeometryId(u64);

impl GeometryId {
    /// Initializes an identifier from its raw integer value.
    pub const fn from_raw(id: u64) -> Self {
        GeometryId(id)
    }

    /// The raw integer value of this identifier.
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::GeometryId;

    #[test]
    fn raw_round_trip() {
        let id = GeometryId::from_raw(42);
        assert_eq!(id.into_raw(), 42);
        assert_ne!(id, GeometryId::from_raw(43));
    }
}
