use crate::Vector3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is expected to be unit length; the intersection routines
/// rely on it when they convert parametric distances to world distances.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}

/// Mirror `direction` about `normal`.
///
/// Both inputs are unit vectors; the result is then unit length as well.
#[inline]
pub fn reflect(direction: Vector3, normal: Vector3) -> Vector3 {
    direction - 2.0 * direction.dot(normal) * normal
}

/// Bend `direction` through a surface with unit `normal` by Snell's law.
///
/// `eta_ratio` is the index of the medium being left over the index of the
/// medium being entered, and `normal` must face the incoming direction.
/// Returns `None` on total internal reflection.
pub fn refract(direction: Vector3, normal: Vector3, eta_ratio: f64) -> Option<Vector3> {
    let cos_i = -direction.dot(normal);
    let sin2_t = eta_ratio * eta_ratio * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return None;
    }

    let cos_t = (1.0 - sin2_t).sqrt();
    let refracted = eta_ratio * direction + (eta_ratio * cos_i - cos_t) * normal;
    refracted.try_normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn incident(angle: f64) -> Vector3 {
        // Travels down onto the XZ plane, tilted by `angle` from the -Y axis
        Vector3::new(angle.sin(), -angle.cos(), 0.0)
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vector3::ZERO, Vector3::X);

        assert_eq!(ray.at(0.0), Vector3::ZERO);
        assert_eq!(ray.at(1.0), Vector3::X);
        assert_eq!(ray.at(2.0), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Vector3::ZERO, Vector3::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin, ray2.origin);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }

    #[test]
    fn test_reflect_preserves_angle() {
        let normal = Vector3::Y;
        for i in 0..8 {
            let d = incident(i as f64 * 0.2);
            let r = reflect(d, normal);

            assert!((r.length() - 1.0).abs() < EPS);
            assert!((r.dot(normal) + d.dot(normal)).abs() < EPS);
        }
    }

    #[test]
    fn test_reflect_off_tilted_normal() {
        let normal = Vector3::new(1.0, 1.0, 0.0).normalize();
        let d = Vector3::new(0.0, -1.0, 0.0);
        let r = reflect(d, normal);

        assert!(r.abs_diff_eq(Vector3::X, EPS));
    }

    #[test]
    fn test_double_reflection_round_trip() {
        let normal = Vector3::new(0.3, 1.0, -0.2).normalize();
        let d = Vector3::new(0.5, -0.7, 0.1).normalize();

        let back = reflect(reflect(d, normal), normal);
        assert!(back.abs_diff_eq(d, EPS));
    }

    #[test]
    fn test_refract_straight_through() {
        let d = Vector3::new(0.0, -1.0, 0.0);
        let t = refract(d, Vector3::Y, 1.0 / 1.5).unwrap();
        assert!(t.abs_diff_eq(d, EPS));
    }

    #[test]
    fn test_refract_obeys_snell() {
        let (eta_i, eta_t) = (1.0, 1.5);
        let normal = Vector3::Y;

        for i in 1..8 {
            let theta_i = i as f64 * 0.18;
            let t = refract(incident(theta_i), normal, eta_i / eta_t).unwrap();

            assert!((t.length() - 1.0).abs() < EPS);
            // Transmitted ray continues below the surface on the same side
            assert!(t.y < 0.0 && t.x > 0.0);

            let sin_t = t.cross(-normal).length();
            assert!((eta_i * theta_i.sin() - eta_t * sin_t).abs() < 1e-9);
        }
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Leaving glass into air: critical angle is asin(1/1.5) ~ 0.7297 rad
        let eta = 1.5;
        let normal = Vector3::Y;

        assert!(refract(incident(0.9), normal, eta).is_none());
        assert!(refract(incident(1.2), normal, eta).is_none());
        assert!(refract(incident(0.6), normal, eta).is_some());
    }

    #[test]
    fn test_tir_iff_eta_sin_exceeds_one() {
        let eta = 1.33;
        for i in 0..16 {
            let theta = i as f64 * 0.1;
            let tir = eta * theta.sin() > 1.0;
            assert_eq!(refract(incident(theta), Vector3::Y, eta).is_none(), tir);
        }
    }
}
