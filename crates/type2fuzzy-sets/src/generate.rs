//! Generators for common parametric fuzzy sets.
//!
//! Every generator samples its membership function on a caller-supplied
//! domain and returns a set built through the ordinary `add_element` calls,
//! so the result is indistinguishable from a hand-built one.

use crate::error::{FuzzySetError, Result};
use crate::general::GeneralType2FuzzySet;
use crate::interval::IntervalType2FuzzySet;
use crate::type1::Type1FuzzySet;
use crate::util::round_to;

pub use crate::util::linspace;

/// Degrees produced by the type-1 shape generators are rounded to this many
/// decimals.
pub const SHAPE_DECIMALS: u32 = 3;

fn gaussian(x: f64, mean: f64, sigma: f64) -> f64 {
    (-0.5 * ((x - mean) / sigma).powi(2)).exp()
}

fn ensure_ordered(name: &str, values: &[f64]) -> Result<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(FuzzySetError::InvalidParameter(format!(
            "{} parameters must be finite",
            name
        )));
    }
    if values.windows(2).any(|w| w[0] > w[1]) {
        return Err(FuzzySetError::InvalidParameter(format!(
            "{} parameters must be non-decreasing, got {:?}",
            name, values
        )));
    }
    Ok(())
}

/// Gaussian interval type-2 set with a fixed deviation and a mean anywhere in
/// `[mean1, mean2]`.
///
/// The upper function is 1 between the two means; the lower function is the
/// smaller of the two Gaussians.
pub fn gaussian_uncertain_mean(
    domain: &[f64],
    mean1: f64,
    mean2: f64,
    sigma: f64,
) -> Result<IntervalType2FuzzySet> {
    ensure_ordered("uncertain mean", &[mean1, mean2])?;
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(FuzzySetError::InvalidParameter(format!(
            "sigma must be positive, got {}",
            sigma
        )));
    }
    let mut set = IntervalType2FuzzySet::new();
    for &x in domain {
        let g1 = gaussian(x, mean1, sigma);
        let g2 = gaussian(x, mean2, sigma);
        let upper = if (mean1..=mean2).contains(&x) {
            1.0
        } else {
            g1.max(g2)
        };
        set.add_element_from_values(x, g1.min(g2), upper)?;
    }
    Ok(set)
}

/// Gaussian interval type-2 set with a fixed mean and a deviation anywhere in
/// `[sigma1, sigma2]`.
pub fn gaussian_uncertain_deviation(
    domain: &[f64],
    sigma1: f64,
    sigma2: f64,
    mean: f64,
) -> Result<IntervalType2FuzzySet> {
    ensure_ordered("uncertain deviation", &[sigma1, sigma2])?;
    if !(sigma1 > 0.0 && mean.is_finite()) {
        return Err(FuzzySetError::InvalidParameter(format!(
            "deviations must be positive and the mean finite, got sigma1={} mean={}",
            sigma1, mean
        )));
    }
    let mut set = IntervalType2FuzzySet::new();
    for &x in domain {
        set.add_element_from_values(x, gaussian(x, mean, sigma1), gaussian(x, mean, sigma2))?;
    }
    Ok(set)
}

fn triangle_degree(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x < a || x > c {
        0.0
    } else if x <= b {
        if b == a {
            1.0
        } else {
            (x - a) / (b - a)
        }
    } else if c == b {
        1.0
    } else {
        (c - x) / (c - b)
    }
}

/// Triangular type-1 set with feet at `a`, `c` and peak at `b`.
pub fn triangular(domain: &[f64], a: f64, b: f64, c: f64) -> Result<Type1FuzzySet> {
    ensure_ordered("triangular", &[a, b, c])?;
    let mut set = Type1FuzzySet::new();
    for &x in domain {
        set.add_element(x, round_to(triangle_degree(x, a, b, c), SHAPE_DECIMALS))?;
    }
    Ok(set)
}

/// Trapezoidal type-1 set with feet at `a`, `d` and plateau over `[b, c]`.
pub fn trapezoidal(domain: &[f64], a: f64, b: f64, c: f64, d: f64) -> Result<Type1FuzzySet> {
    ensure_ordered("trapezoidal", &[a, b, c, d])?;
    let mut set = Type1FuzzySet::new();
    for &x in domain {
        let degree = if x < a || x > d {
            0.0
        } else if x < b {
            (x - a) / (b - a)
        } else if x <= c {
            1.0
        } else {
            (d - x) / (d - c)
        };
        set.add_element(x, round_to(degree, SHAPE_DECIMALS))?;
    }
    Ok(set)
}

/// General type-2 set whose secondary function at each `x` is the triangle
/// `shape(x) = (low, peak, high)` sampled on `secondary`.
///
/// Only non-zero secondary grades are stored.
pub fn triangular_secondary<F>(
    primary: &[f64],
    secondary: &[f64],
    shape: F,
) -> Result<GeneralType2FuzzySet>
where
    F: Fn(f64) -> (f64, f64, f64),
{
    let mut set = GeneralType2FuzzySet::new();
    for &x in primary {
        let (low, peak, high) = shape(x);
        let triangle = triangular(secondary, low, peak, high)?;
        for (u, grade) in triangle.support() {
            set.add_element(x, u, grade)?;
        }
    }
    Ok(set)
}

/// Grade at `x` of the triangle with feet `left`, `right` and peak `centre`.
/// A zero-width side is a vertical edge at the peak.
fn spread_degree(x: f64, left: f64, centre: f64, right: f64) -> f64 {
    let rising = if centre > left {
        (x - left) / (centre - left)
    } else if x >= centre {
        1.0
    } else {
        0.0
    };
    let falling = if right > centre {
        (right - x) / (right - centre)
    } else if x <= centre {
        1.0
    } else {
        0.0
    };
    rising.min(falling).max(0.0)
}

fn grid_step(name: &str, domain: &[f64]) -> Result<f64> {
    match domain {
        [first, second, ..] if second > first => Ok(second - first),
        _ => Err(FuzzySetError::InvalidParameter(format!(
            "{} domain needs at least two ascending values",
            name
        ))),
    }
}

/// General type-2 set from a horizontal-spread definition.
///
/// Each control point is `(x, u, delta_left, delta_right)`: at secondary
/// value `u` the set is a triangle over the primary domain with feet at
/// `x - delta_left`, `x + delta_right` and peak at `x`. Between consecutive
/// points the position, level and spreads are interpolated linearly for every
/// primary domain value on the segment. Secondary rows skipped between two
/// neighbouring primary values are filled with the later triangle. Control
/// points are snapped to the (uniform) domain grids and must be ordered by `x`.
pub fn horizontal(
    primary: &[f64],
    secondary: &[f64],
    points: &[(f64, f64, f64, f64)],
) -> Result<GeneralType2FuzzySet> {
    let x_step = grid_step("primary", primary)?;
    let u_step = grid_step("secondary", secondary)?;
    let positions: Vec<f64> = points.iter().map(|p| p.0).collect();
    ensure_ordered("horizontal spread", &positions)?;
    if points
        .iter()
        .any(|&(_, u, dl, dr)| !(u.is_finite() && dl >= 0.0 && dr >= 0.0))
    {
        return Err(FuzzySetError::InvalidParameter(
            "spreads must be non-negative and secondary values finite".to_string(),
        ));
    }

    let snap = |value: f64, step: f64| (value / step).round() * step;
    let mut grades = vec![vec![0.0_f64; primary.len()]; secondary.len()];

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let (x0, x1) = (snap(start.0, x_step), snap(end.0, x_step));
        if x1 <= x0 {
            continue;
        }
        let (u0, u1) = (snap(start.1, u_step), snap(end.1, u_step));
        let mut previous_row: Option<usize> = None;

        for &centre in primary.iter().filter(|&&x| x0 <= x && x <= x1) {
            let r = (centre - x0) / (x1 - x0);
            let row = ((u0 + r * (u1 - u0) - secondary[0]) / u_step).round();
            if row < 0.0 || row >= secondary.len() as f64 {
                continue;
            }
            let row = row as usize;
            let left = r * (x1 - end.2 - x0 + start.2) + (x0 - start.2);
            let right = r * (x1 + end.3 - x0 - start.3) + (x0 + start.3);

            let rows = match previous_row {
                Some(p) if p < row => p + 1..=row,
                Some(p) if p > row => row..=p - 1,
                _ => row..=row,
            };
            for k in rows {
                for (cell, &x) in grades[k].iter_mut().zip(primary) {
                    let degree = round_to(spread_degree(x, left, centre, right), SHAPE_DECIMALS);
                    *cell = cell.max(degree);
                }
            }
            previous_row = Some(row);
        }
    }

    GeneralType2FuzzySet::from_array(primary, secondary, &grades)
}
