//! Great-circle angular separation between sky positions.

/// Angular separation in degrees between two equatorial positions (degrees).
///
/// Spherical law of cosines. The direction cosine is clamped to [-1, 1]
/// before `acos`; identical inputs can push it past 1.0 by a few ulps.
pub fn separation_deg(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    let ra1 = ra1_deg.to_radians();
    let dec1 = dec1_deg.to_radians();
    let ra2 = ra2_deg.to_radians();
    let dec2 = dec2_deg.to_radians();

    let mu = dec1.cos() * ra1.cos() * dec2.cos() * ra2.cos()
        + dec1.cos() * ra1.sin() * dec2.cos() * ra2.sin()
        + dec1.sin() * dec2.sin();

    mu.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn identical_points_give_zero() {
        // mu can exceed 1.0 by float error here; the clamp keeps acos defined.
        // acos amplifies ulp-level error near mu = 1, hence the loose bound.
        let s = separation_deg(83.633, 22.0145, 83.633, 22.0145);
        assert!(s.abs() < 1e-5, "s = {s}");
        assert!(!s.is_nan());
    }

    #[test]
    fn quarter_circle_on_equator() {
        let s = separation_deg(0.0, 0.0, 90.0, 0.0);
        assert!((s - 90.0).abs() < EPS);
    }

    #[test]
    fn antipodal_poles() {
        let s = separation_deg(0.0, -90.0, 0.0, 90.0);
        assert!((s - 180.0).abs() < EPS);
    }

    #[test]
    fn along_one_meridian() {
        let s = separation_deg(10.0, 10.0, 10.0, 10.5);
        assert!((s - 0.5).abs() < 1e-6, "s = {s}");
    }

    #[test]
    fn symmetric_in_arguments() {
        let a = separation_deg(12.3, 45.6, 78.9, -10.1);
        let b = separation_deg(78.9, -10.1, 12.3, 45.6);
        assert!((a - b).abs() < EPS);
    }
}
