/// Leading coefficients smaller than this make the equation degenerate.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Real roots of `a*t^2 + b*t + c = 0` in ascending order.
///
/// A tangent (zero discriminant) yields the same root twice. Returns `None`
/// when the discriminant is negative or when `a` vanishes, in which case the
/// equation is not quadratic and the callers (ray/sphere tests with a
/// zero-length direction) have nothing to intersect.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a.abs() < DEGENERATE_EPSILON {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    // Avoid cancellation between -b and sqrt_d
    let q = if b < 0.0 {
        -0.5 * (b - sqrt_d)
    } else {
        -0.5 * (b + sqrt_d)
    };

    let (t0, t1) = if q == 0.0 {
        // b == 0 and c == 0: double root at zero
        (0.0, 0.0)
    } else {
        (q / a, c / q)
    };

    Some(if t0 <= t1 { (t0, t1) } else { (t1, t0) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_roots_sorted() {
        // (t - 4)(t - 6) = t^2 - 10t + 24
        let (t0, t1) = solve_quadratic(1.0, -10.0, 24.0).unwrap();
        assert!((t0 - 4.0).abs() < 1e-12);
        assert!((t1 - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_roots_of_opposite_sign() {
        let (t0, t1) = solve_quadratic(1.0, 0.0, -1.0).unwrap();
        assert!((t0 + 1.0).abs() < 1e-12);
        assert!((t1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tangent_double_root() {
        let (t0, t1) = solve_quadratic(1.0, -4.0, 4.0).unwrap();
        assert!((t0 - 2.0).abs() < 1e-12);
        assert_eq!(t0, t1);
    }

    #[test]
    fn test_no_real_roots() {
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn test_degenerate_leading_coefficient() {
        assert!(solve_quadratic(0.0, 2.0, 1.0).is_none());
    }

    #[test]
    fn test_zero_double_root() {
        assert_eq!(solve_quadratic(2.0, 0.0, 0.0), Some((0.0, 0.0)));
    }
}
