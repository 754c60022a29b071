/// A range of ray parameters `t`, or of color channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Everything strictly beyond `epsilon`, the range primary and bounce rays are tested on.
    pub fn beyond(epsilon: f64) -> Self {
        Self::new(epsilon, f64::INFINITY)
    }

    /// `min <= x <= max`
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// `min < x < max`. Hits exactly at either end are rejected.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Same lower bound, new upper bound. Used to shrink the search range as closer hits are found.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }

    /// The unit interval [0, 1], the displayable range of a color channel.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        for x in [0.0, 5.0, 10.0] {
            assert!(interval.contains(x));
        }
        for x in [-0.1, 10.1, f64::NAN] {
            assert!(!interval.contains(x));
        }
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        assert!(interval.surrounds(5.0));
        // Endpoints are outside
        for x in [0.0, 10.0, -0.1, f64::NAN] {
            assert!(!interval.surrounds(x));
        }
    }

    #[test]
    fn test_interval_beyond() {
        let interval = Interval::beyond(1e-6);

        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(1e-6));
        assert!(interval.surrounds(1e-3));
        assert!(interval.surrounds(1e12));
    }

    #[test]
    fn test_interval_with_max() {
        let shrunk = Interval::beyond(0.5).with_max(4.0);
        assert_eq!(shrunk, Interval::new(0.5, 4.0));
    }

    #[test]
    fn test_interval_clamp() {
        assert_eq!(Interval::UNIT.clamp(-5.0), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.25), 0.25);
        assert_eq!(Interval::UNIT.clamp(15.0), 1.0);
    }
}
