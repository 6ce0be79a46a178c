//! Kelvin to device color value conversion.
//!
//! The firmware encodes color temperature in an inverse mired-like unit.
//! The constants are empirical, taken from observed firmware behavior
//! (see pyleglight); the two functions are only approximate inverses.

pub const MIN_KELVIN: u16 = 2900;
pub const MAX_KELVIN: u16 = 7000;

pub fn kelvin_to_device_value(kelvin: u16) -> u16 {
    (987_007.0 * f64::from(kelvin).powf(-0.999)).round() as u16
}

pub fn device_value_to_kelvin(value: u16) -> u16 {
    // Zero occurs when status parsing defaulted a missing field.
    if value == 0 {
        return 0;
    }
    (1_000_000.0 / f64::from(value)).round() as u16
}
