use crate::complex::Complex;

/// Convert rectangular coordinates to (magnitude, angle in radians).
///
/// The angle is the principal `atan2` branch, in (-π, π]. `atan2(0, 0)` is 0.
pub fn to_polar(re: f64, im: f64) -> (f64, f64) {
    ((re * re + im * im).sqrt(), im.atan2(re))
}

pub fn from_polar(r: f64, theta: f64) -> (f64, f64) {
    (r * theta.cos(), r * theta.sin())
}

/// Compare two complex numbers part by part within `eps`.
///
/// Exactly equal parts always compare equal, so matching infinities pass.
/// Otherwise a part passes when its absolute difference is below `eps`, or
/// below `eps` scaled by the expected magnitude for large values.
pub fn approx_eq(expected: &Complex, calc: &Complex, eps: f64) -> bool {
    approx_eq_f64(expected.real(), calc.real(), eps)
        && approx_eq_f64(expected.imaginary(), calc.imaginary(), eps)
}

fn approx_eq_f64(expected: f64, calc: f64, eps: f64) -> bool {
    if expected == calc {
        return true;
    }

    let diff = (calc - expected).abs();
    diff < eps || diff < (eps * expected).abs()
}
