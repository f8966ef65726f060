//! Galactic ↔ Equatorial (J2000) coordinate conversion.

use std::f64::consts::PI;

/// Right ascension of the galactic north pole, J2000, degrees.
pub const RA_GP_DEG: f64 = 192.85948;
/// Declination of the galactic north pole, J2000, degrees.
pub const DE_GP_DEG: f64 = 27.12825;
/// Galactic longitude of the north celestial pole, degrees.
pub const LCP_DEG: f64 = 122.932;

/// Galactic sky position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Galactic {
    /// Longitude in degrees, range [0, 360).
    pub l_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub b_deg: f64,
}

/// Equatorial (J2000) sky position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    /// Right ascension in degrees, range [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

/// Convert Galactic to Equatorial J2000 coordinates (degrees).
///
/// RA output is in [0, 360). Accurate to ~3 digits, limited by the
/// precision of the pole constants. Inputs are not range-checked:
/// out-of-range values wrap through the periodic trig functions and
/// NaN propagates to the output.
pub fn gal2equ(l_deg: f64, b_deg: f64) -> Equatorial {
    let ll = l_deg.to_radians();
    let bb = b_deg.to_radians();
    let ra_gp = RA_GP_DEG.to_radians();
    let de_gp = DE_GP_DEG.to_radians();
    let lcp = LCP_DEG.to_radians();

    let sin_d = de_gp.sin() * bb.sin() + de_gp.cos() * bb.cos() * (lcp - ll).cos();
    // RA offset from the galactic pole's RA.
    let ramragp = (bb.cos() * (lcp - ll).sin())
        .atan2(de_gp.cos() * bb.sin() - de_gp.sin() * bb.cos() * (lcp - ll).cos());
    let dec = sin_d.asin();
    let ra = (ramragp + ra_gp + 2.0 * PI) % (2.0 * PI);
    // Second wrap at degree level: to_degrees() of a value just below
    // 2*pi can round to exactly 360.0.
    let ra_deg = ra.to_degrees() % 360.0;

    Equatorial {
        ra_deg,
        dec_deg: dec.to_degrees(),
    }
}

/// Convert Equatorial J2000 to Galactic coordinates (degrees).
///
/// Mirror of [`gal2equ`] with the same pole constants; longitude output
/// is in [0, 360). Round trips agree to ~1e-3 deg, not bit-exact.
pub fn equ2gal(ra_deg: f64, dec_deg: f64) -> Galactic {
    let ra = ra_deg.to_radians();
    let dec = dec_deg.to_radians();
    let ra_gp = RA_GP_DEG.to_radians();
    let de_gp = DE_GP_DEG.to_radians();
    let lcp = LCP_DEG.to_radians();

    let sin_b = de_gp.sin() * dec.sin() + de_gp.cos() * dec.cos() * (ra - ra_gp).cos();
    // Angle from the north celestial pole's longitude to this position.
    let lcpml = (dec.cos() * (ra - ra_gp).sin())
        .atan2(de_gp.cos() * dec.sin() - de_gp.sin() * dec.cos() * (ra - ra_gp).cos());
    let bb = sin_b.asin();
    let ll = (lcp - lcpml + 2.0 * PI) % (2.0 * PI);
    let l_deg = ll.to_degrees() % 360.0;

    Galactic {
        l_deg,
        b_deg: bb.to_degrees(),
    }
}
