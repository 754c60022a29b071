// Camera-to-world transforms.
//
// The camera looks down +forward with +up on screen; points are expressed in
// the (right, up, forward) frame and placed at the eye by the translation column.

use glam::{DMat4, DVec3};

use crate::{MathError, Vec3Ext};

/// Orthonormal camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub right: DVec3,
    pub up: DVec3,
    pub forward: DVec3,
}

impl CameraBasis {
    /// Build the frame for a camera at `eye` looking at `target`.
    ///
    /// Fails when `eye == target` or when the view direction is parallel to `up`.
    pub fn new(eye: DVec3, target: DVec3, up: DVec3) -> Result<Self, MathError> {
        let forward = (target - eye).checked_normalize()?;
        let right = forward.cross(up).checked_normalize()?;
        let up = right.cross(forward);

        Ok(Self { right, up, forward })
    }

    /// Affine camera-to-world matrix with the camera placed at `eye`.
    pub fn to_matrix(&self, eye: DVec3) -> DMat4 {
        DMat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.forward.extend(0.0),
            eye.extend(1.0),
        )
    }
}

/// Camera-to-world matrix for a camera at `eye` looking at `target`.
pub fn look_at(eye: DVec3, target: DVec3, up: DVec3) -> Result<DMat4, MathError> {
    Ok(CameraBasis::new(eye, target, up)?.to_matrix(eye))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_is_orthonormal() {
        let basis = CameraBasis::new(
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(-2.0, 0.5, -4.0),
            DVec3::Y,
        )
        .unwrap();

        for v in [basis.right, basis.up, basis.forward] {
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
        assert!(basis.right.dot(basis.up).abs() < 1e-12);
        assert!(basis.right.dot(basis.forward).abs() < 1e-12);
        assert!(basis.up.dot(basis.forward).abs() < 1e-12);
        // Screen up stays on the same side as the requested up
        assert!(basis.up.y > 0.0);
    }

    #[test]
    fn test_default_view_axes() {
        let basis = CameraBasis::new(DVec3::ZERO, DVec3::NEG_Z, DVec3::Y).unwrap();

        assert!(basis.forward.abs_diff_eq(DVec3::NEG_Z, 1e-12));
        assert!(basis.right.abs_diff_eq(DVec3::X, 1e-12));
        assert!(basis.up.abs_diff_eq(DVec3::Y, 1e-12));
    }

    #[test]
    fn test_look_at_translation() {
        let eye = DVec3::new(10.0, 20.0, 30.0);
        let mat = look_at(eye, eye + DVec3::NEG_Z, DVec3::Y).unwrap();

        // The camera-space origin is the eye
        assert!(mat.transform_point3(DVec3::ZERO).abs_diff_eq(eye, 1e-12));
        // Directions ignore the translation
        let forward = mat.transform_vector3(DVec3::Z);
        assert!(forward.abs_diff_eq(DVec3::NEG_Z, 1e-12));
    }

    #[test]
    fn test_look_at_round_trip() {
        let mat = look_at(DVec3::new(3.0, 1.0, 2.0), DVec3::ZERO, DVec3::Y).unwrap();
        let inv = mat.inverse();

        let point = DVec3::new(5.0, 3.0, 2.0);
        let back = inv.transform_point3(mat.transform_point3(point));
        assert!((back - point).length() < 1e-9);
    }

    #[test]
    fn test_degenerate_views() {
        assert_eq!(
            CameraBasis::new(DVec3::ONE, DVec3::ONE, DVec3::Y),
            Err(MathError::ZeroLengthVector)
        );
        assert_eq!(
            look_at(DVec3::ZERO, DVec3::new(0.0, 5.0, 0.0), DVec3::Y),
            Err(MathError::ZeroLengthVector)
        );
    }
}
