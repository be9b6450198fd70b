//! Physical constants (SI) and display-only derived quantities.

/// Gravitational constant (m^3 kg^-1 s^-2).
pub const G_SI: f64 = 6.674e-11;

/// Speed of light (m/s).
pub const C_SI: f64 = 299_792_458.0;

/// Schwarzschild radius `r_s = 2 G m / c^2` in meters.
///
/// Informational only: it is reported for a scenario's heaviest body and
/// never feeds back into the force law.
pub fn schwarzschild_radius(mass_kg: f64) -> f64 {
    2.0 * G_SI * mass_kg / (C_SI * C_SI)
}

/// Speed of a circular orbit of radius `r` about a central mass `m`,
/// `v = sqrt(G m / r)`. `g` is passed through so scaled scenarios keep
/// working with a non-SI gravitational constant.
pub fn circular_orbit_speed(g: f64, central_mass: f64, r: f64) -> f64 {
    (g * central_mass / r).sqrt()
}
