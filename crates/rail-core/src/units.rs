//! Physical constants shared across the kernel.
//!
//! All quantities are SI: metres, seconds, kilograms, Newtons.

/// Standard gravity, m/s².
pub const GRAVITY: f64 = 9.81;

/// Air density at sea level, kg/m³.  Used by the energy estimator's
/// aerodynamic drag term.
pub const AIR_DENSITY: f64 = 1.2;

/// Convert joule-seconds accumulated as W·s into kWh.
#[inline]
pub fn watt_secs_to_kwh(ws: f64) -> f64 {
    ws / 3_600_000.0
}
