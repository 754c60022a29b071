use glam::DVec3;
use thiserror::Error;

/// Three-component double precision vector used for points, directions and colors.
pub type Vector3 = DVec3;

/// RGB color. Channels are linear and unbounded until post-processing.
pub type Color = DVec3;

/// Vectors shorter than this cannot be normalized.
pub const NORMALIZE_EPSILON: f64 = 1e-12;

/// Errors raised by vector operations that have no meaningful result.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,
}

/// Extension trait for DVec3 with the checked operations used at scene-build time.
pub trait Vec3Ext: Sized {
    /// Normalize, failing instead of producing NaN when the length is (numerically) zero.
    fn checked_normalize(self) -> Result<Self, MathError>;
}

impl Vec3Ext for DVec3 {
    fn checked_normalize(self) -> Result<Self, MathError> {
        let length = self.length();
        if !length.is_finite() || length < NORMALIZE_EPSILON {
            return Err(MathError::ZeroLengthVector);
        }
        Ok(self / length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_normalize() {
        let v = DVec3::new(3.0, 0.0, 4.0).checked_normalize().unwrap();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!(v.abs_diff_eq(DVec3::new(0.6, 0.0, 0.8), 1e-12));
    }

    #[test]
    fn test_checked_normalize_zero() {
        assert_eq!(
            DVec3::ZERO.checked_normalize(),
            Err(MathError::ZeroLengthVector)
        );
        assert_eq!(
            DVec3::splat(1e-15).checked_normalize(),
            Err(MathError::ZeroLengthVector)
        );
    }

    #[test]
    fn test_lengths_non_negative() {
        let v = DVec3::new(-1.0, -2.0, -2.0);
        assert_eq!(v.length_squared(), 9.0);
        assert_eq!(v.length(), 3.0);
    }
}
