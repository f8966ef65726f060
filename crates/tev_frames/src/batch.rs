//! Elementwise slice versions of the scalar transforms.
//!
//! Results are identical to calling the scalar function on each element.
//! Unlike the scalar API, slice arguments are validated: lengths must
//! match and every element must be finite.

use crate::celestial::{equ2gal, gal2equ};
use crate::error::CoordError;
use crate::separation::separation_deg;

fn check_lengths(first: usize, rest: &[usize]) -> Result<(), CoordError> {
    for &len in rest {
        if len != first {
            return Err(CoordError::LengthMismatch(first, len));
        }
    }
    Ok(())
}

fn check_finite(slices: &[&[f64]]) -> Result<(), CoordError> {
    for s in slices {
        for (i, x) in s.iter().enumerate() {
            if !x.is_finite() {
                return Err(CoordError::NonFinite(i));
            }
        }
    }
    Ok(())
}

/// Elementwise [`gal2equ`]: returns `(ra_deg, dec_deg)` vectors.
pub fn gal2equ_batch(l_deg: &[f64], b_deg: &[f64]) -> Result<(Vec<f64>, Vec<f64>), CoordError> {
    check_lengths(l_deg.len(), &[b_deg.len()])?;
    check_finite(&[l_deg, b_deg])?;

    let mut ra = Vec::with_capacity(l_deg.len());
    let mut dec = Vec::with_capacity(l_deg.len());
    for (&l, &b) in l_deg.iter().zip(b_deg) {
        let e = gal2equ(l, b);
        ra.push(e.ra_deg);
        dec.push(e.dec_deg);
    }
    Ok((ra, dec))
}

/// Elementwise [`equ2gal`]: returns `(l_deg, b_deg)` vectors.
pub fn equ2gal_batch(ra_deg: &[f64], dec_deg: &[f64]) -> Result<(Vec<f64>, Vec<f64>), CoordError> {
    check_lengths(ra_deg.len(), &[dec_deg.len()])?;
    check_finite(&[ra_deg, dec_deg])?;

    let mut l = Vec::with_capacity(ra_deg.len());
    let mut b = Vec::with_capacity(ra_deg.len());
    for (&ra, &dec) in ra_deg.iter().zip(dec_deg) {
        let g = equ2gal(ra, dec);
        l.push(g.l_deg);
        b.push(g.b_deg);
    }
    Ok((l, b))
}

/// Elementwise [`separation_deg`] over four equal-length slices.
pub fn separation_batch(
    ra1_deg: &[f64],
    dec1_deg: &[f64],
    ra2_deg: &[f64],
    dec2_deg: &[f64],
) -> Result<Vec<f64>, CoordError> {
    check_lengths(
        ra1_deg.len(),
        &[dec1_deg.len(), ra2_deg.len(), dec2_deg.len()],
    )?;
    check_finite(&[ra1_deg, dec1_deg, ra2_deg, dec2_deg])?;

    let mut sep = Vec::with_capacity(ra1_deg.len());
    for i in 0..ra1_deg.len() {
        sep.push(separation_deg(
            ra1_deg[i],
            dec1_deg[i],
            ra2_deg[i],
            dec2_deg[i],
        ));
    }
    Ok(sep)
}
