//! Numeric helpers shared by the set types.

use crate::error::{FuzzySetError, Result};

/// Round `value` to `decimals` places (half away from zero).
///
/// Values too large to scale are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// `n` evenly spaced values over `[start, end]`, both ends included.
///
/// `n == 1` yields `[start]`, `n == 0` yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Number of decimal digits needed to print `n`.
pub fn decimal_digits(n: usize) -> u32 {
    n.to_string().len() as u32
}

pub(crate) fn ensure_finite(what: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FuzzySetError::NonFiniteValue { what, value })
    }
}

pub(crate) fn in_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

pub(crate) fn ensure_level(level: f64) -> Result<()> {
    ensure_finite("level", level)?;
    if in_unit_interval(level) {
        Ok(())
    } else {
        Err(FuzzySetError::LevelOutOfRange(level))
    }
}
