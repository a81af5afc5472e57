use crate::error::{ComplexError, Result};
use crate::math::{from_polar, to_polar};
use log::{debug, trace};
use num::complex::Complex64;
use num_traits::{One, Pow, Zero};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

pub mod format;
pub mod parse;

/// A complex number stored as a pair of `f64`
///
/// Equality is exact on both parts. NaN and infinite parts are accepted and
/// propagate through arithmetic the way IEEE floats do. Division and
/// inversion are the exception: a zero divisor is reported as
/// [`ComplexError::DivisionByZero`] instead of producing infinities.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    pub const I: Complex = Complex::new(0.0, 1.0);

    /// Create a new complex number from real and imaginary parts
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Complex { real, imaginary }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub const fn from_real(real: f64) -> Self {
        Complex::new(real, 0.0)
    }

    /// Create a new complex number from a magnitude and angle in radians
    pub fn from_polar(mag: f64, ang: f64) -> Self {
        let (real, imaginary) = from_polar(mag, ang);
        Complex::new(real, imaginary)
    }

    /// Get the real part
    pub fn real(&self) -> f64 {
        self.real
    }

    /// Get the imaginary part
    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    pub fn set_real(&mut self, real: f64) {
        self.real = real;
    }

    pub fn set_imaginary(&mut self, imaginary: f64) {
        self.imaginary = imaginary;
    }

    /// Get the magnitude (Euclidean norm)
    pub fn abs(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Get the argument (phase angle) in (-π, π]
    pub fn arg(&self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Get the complex conjugate
    pub fn conj(&self) -> Self {
        Complex::new(self.real, -self.imaginary)
    }

    /// Calculate the square of the magnitude
    pub fn norm_sqr(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// Divide by `other`, multiplying by its conjugate over its squared magnitude.
    ///
    /// Fails with [`ComplexError::DivisionByZero`] when the squared magnitude
    /// of `other` is exactly zero.
    pub fn checked_div(&self, other: &Complex) -> Result<Complex> {
        let denominator = other.norm_sqr();
        if denominator == 0.0 {
            debug!("rejected division of {} by zero divisor", self);
            return Err(ComplexError::DivisionByZero);
        }
        Ok(Complex::new(
            (self.real * other.real + self.imaginary * other.imaginary) / denominator,
            (self.imaginary * other.real - self.real * other.imaginary) / denominator,
        ))
    }

    /// Multiplicative inverse, `conj(z) / |z|^2`.
    ///
    /// Fails with [`ComplexError::DivisionByZero`] for `0 + 0i`.
    pub fn inverse(&self) -> Result<Complex> {
        let denominator = self.norm_sqr();
        if denominator == 0.0 {
            debug!("rejected inversion of zero");
            return Err(ComplexError::DivisionByZero);
        }
        Ok(Complex::new(
            self.real / denominator,
            -self.imaginary / denominator,
        ))
    }

    /// Raise to an integer power by repeated multiplication.
    ///
    /// `z^0` is `1` for every `z`, zero included. Negative exponents invert
    /// the base first, so they fail with [`ComplexError::DivisionByZero`]
    /// when the base is zero.
    pub fn powi(&self, n: i32) -> Result<Complex> {
        if n == 0 {
            return Ok(Complex::ONE);
        }

        let base = if n > 0 { *self } else { self.inverse()? };
        let power = n.unsigned_abs();
        trace!("powi: multiplying {} by itself {} times", base, power);

        let mut result = Complex::ONE;
        for _ in 0..power {
            result = result * base;
        }
        Ok(result)
    }

    /// Raise to a real power through the polar form, `r^n * e^(i*n*theta)`.
    ///
    /// Never fails; a zero base with a negative exponent yields non-finite parts.
    pub fn powf(&self, n: f64) -> Complex {
        let (r, theta) = to_polar(self.real, self.imaginary);
        Complex::from_polar(r.powf(n), theta * n)
    }

    /// Raise to a complex power on the principal branch, `exp(w * ln z)`.
    ///
    /// A zero base gives `1` for a zero exponent and `0` for every other
    /// exponent, including negative and complex ones.
    pub fn powc(&self, exponent: &Complex) -> Complex {
        if self.real == 0.0 && self.imaginary == 0.0 {
            if exponent.real == 0.0 && exponent.imaginary == 0.0 {
                return Complex::ONE;
            }
            return Complex::ZERO;
        }

        let (r, theta) = to_polar(self.real, self.imaginary);
        let c = exponent.real;
        let d = exponent.imaginary;

        let ln_r = r.ln();
        let new_r = (c * ln_r - d * theta).exp();
        let new_theta = c * theta + d * ln_r;

        Complex::from_polar(new_r, new_theta)
    }

    /// Check if either part is NaN
    pub fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imaginary.is_nan()
    }

    /// Check if either part is infinite
    pub fn is_infinite(&self) -> bool {
        self.real.is_infinite() || self.imaginary.is_infinite()
    }

    /// Check if both parts are finite
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }
}

// Implement basic arithmetic operations
impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Complex::new(self.real + other.real, self.imaginary + other.imaginary)
    }
}

impl Add<&Complex> for Complex {
    type Output = Self;

    fn add(self, other: &Complex) -> Self {
        self + *other
    }
}

impl Add<Complex> for &Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        *self + other
    }
}

impl Add<&Complex> for &Complex {
    type Output = Complex;

    fn add(self, other: &Complex) -> Complex {
        *self + *other
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    fn add(self, other: f64) -> Self {
        Complex::new(self.real + other, self.imaginary)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Complex::new(self.real - other.real, self.imaginary - other.imaginary)
    }
}

impl Sub<&Complex> for Complex {
    type Output = Self;

    fn sub(self, other: &Complex) -> Self {
        self - *other
    }
}

impl Sub<Complex> for &Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        *self - other
    }
}

impl Sub<&Complex> for &Complex {
    type Output = Complex;

    fn sub(self, other: &Complex) -> Complex {
        *self - *other
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    fn sub(self, other: f64) -> Self {
        Complex::new(self.real - other, self.imaginary)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Complex::new(
            self.real * other.real - self.imaginary * other.imaginary,
            self.real * other.imaginary + self.imaginary * other.real,
        )
    }
}

impl Mul<&Complex> for Complex {
    type Output = Self;

    fn mul(self, other: &Complex) -> Self {
        self * *other
    }
}

impl Mul<Complex> for &Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        *self * other
    }
}

impl Mul<&Complex> for &Complex {
    type Output = Complex;

    fn mul(self, other: &Complex) -> Complex {
        *self * *other
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Complex::new(self.real * other, self.imaginary * other)
    }
}

// Division can fail, so the operator yields a Result
impl Div for Complex {
    type Output = Result<Complex>;

    fn div(self, other: Self) -> Result<Complex> {
        self.checked_div(&other)
    }
}

impl Div<&Complex> for Complex {
    type Output = Result<Complex>;

    fn div(self, other: &Complex) -> Result<Complex> {
        self.checked_div(other)
    }
}

impl Div<Complex> for &Complex {
    type Output = Result<Complex>;

    fn div(self, other: Complex) -> Result<Complex> {
        self.checked_div(&other)
    }
}

impl Div<&Complex> for &Complex {
    type Output = Result<Complex>;

    fn div(self, other: &Complex) -> Result<Complex> {
        self.checked_div(other)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Complex::new(-self.real, -self.imaginary)
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        -*self
    }
}

// Implement assignment operators
impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<&Complex> for Complex {
    fn add_assign(&mut self, other: &Complex) {
        *self = *self + *other;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<&Complex> for Complex {
    fn sub_assign(&mut self, other: &Complex) {
        *self = *self - *other;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<&Complex> for Complex {
    fn mul_assign(&mut self, other: &Complex) {
        *self = *self * *other;
    }
}

// Implement Pow trait
impl Pow<i32> for Complex {
    type Output = Result<Complex>;

    fn pow(self, exp: i32) -> Result<Complex> {
        self.powi(exp)
    }
}

impl Pow<i32> for &Complex {
    type Output = Result<Complex>;

    fn pow(self, exp: i32) -> Result<Complex> {
        self.powi(exp)
    }
}

impl Pow<f64> for Complex {
    type Output = Complex;

    fn pow(self, exp: f64) -> Complex {
        self.powf(exp)
    }
}

impl Pow<f64> for &Complex {
    type Output = Complex;

    fn pow(self, exp: f64) -> Complex {
        self.powf(exp)
    }
}

impl Pow<Complex> for Complex {
    type Output = Complex;

    fn pow(self, exp: Complex) -> Complex {
        self.powc(&exp)
    }
}

impl Pow<&Complex> for &Complex {
    type Output = Complex;

    fn pow(self, exp: &Complex) -> Complex {
        self.powc(exp)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }

    fn is_one(&self) -> bool {
        *self == Complex::ONE
    }
}

// Conversion from f64 (real number)
impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Complex::from_real(real)
    }
}

// Conversion from (f64, f64) tuple
impl From<(f64, f64)> for Complex {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Complex::new(real, imaginary)
    }
}

impl From<Complex64> for Complex {
    fn from(num: Complex64) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Complex64 {
        Complex64::new(value.real, value.imaginary)
    }
}
