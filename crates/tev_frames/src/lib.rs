//! Celestial coordinate transforms for gamma-ray analysis.
//!
//! Provides Galactic ↔ Equatorial (J2000) conversion and great-circle
//! angular separation, as scalar functions and elementwise over slices.

pub mod batch;
pub mod celestial;
pub mod error;
pub mod separation;

pub use batch::{equ2gal_batch, gal2equ_batch, separation_batch};
pub use celestial::{DE_GP_DEG, Equatorial, Galactic, LCP_DEG, RA_GP_DEG, equ2gal, gal2equ};
pub use error::CoordError;
pub use separation::separation_deg;
