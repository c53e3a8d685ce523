/// Per-star orbital data, keyed by the star's listing text ("G2 V", "DM", "BD").
pub trait StellarOracle: Send + Sync {
    fn stellar_detail(&self, star: &str) -> Option<StellarDetail>;
}

/// Orbit numbers for a star.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StellarDetail {
    /// Orbit at the centre of the habitable zone.
    pub habitable_zone: i32,
    /// Innermost usable orbit.
    pub min_orbit: i32,
}

impl StellarDetail {
    pub const fn new(habitable_zone: i32, min_orbit: i32) -> Self {
        Self {
            habitable_zone,
            min_orbit,
        }
    }

    /// Orbit for a mainworld `variance` orbits out from the habitable zone,
    /// pushed out to the minimum orbit if needed.
    ///
    /// Returns the orbit and the variance actually used. When the orbit is
    /// pushed out, the minimum orbit is added to the variance.
    pub fn place(&self, variance: i32) -> (i32, i32) {
        let orbit = self.habitable_zone + variance;
        if orbit < self.min_orbit {
            (self.min_orbit, variance + self.min_orbit)
        } else {
            (orbit, variance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_respects_minimum_orbit() {
        let detail = StellarDetail::new(3, 0);
        assert_eq!(detail.place(-1), (2, -1));
        assert_eq!(detail.place(2), (5, 2));

        let giant = StellarDetail::new(8, 7);
        assert_eq!(giant.place(-2), (7, 5));
        assert_eq!(giant.place(0), (8, 0));
    }
}
