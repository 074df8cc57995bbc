//! Immutable complex number used by the spectral engine.
//!
//! [`Complex`] wraps [`num_complex::Complex64`] and exposes the handful of
//! operations the direct Fourier transform needs: addition, scalar
//! multiplication, construction on the unit circle, magnitude, and a
//! magnitude comparator.

use std::fmt::{Display, Formatter};
use std::ops::Add;

use num_complex::Complex64;
use num_traits::Zero;

/// A complex number `re + i·im`.
///
/// Values are `Copy` and never mutated; every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Complex(Complex64);

impl Complex {
    /// The additive identity `0 + 0i`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a complex number from its real and imaginary parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }

    /// Real part.
    pub const fn re(self) -> f64 {
        self.0.re
    }

    /// Imaginary part.
    pub const fn im(self) -> f64 {
        self.0.im
    }

    /// Returns the point on the unit circle at angle `theta` (radians), `e^{iθ}`.
    pub fn unit_angle(theta: f64) -> Self {
        Self(Complex64::from_polar(1.0, theta))
    }

    /// Componentwise sum of `self` and `other`.
    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// Multiplies both components by the real scalar `s`.
    pub fn scale(self, s: f64) -> Self {
        Self(self.0 * s)
    }

    /// Euclidean magnitude `sqrt(re² + im²)`.
    pub fn magnitude(self) -> f64 {
        self.0.norm()
    }

    /// Returns whichever operand has the larger magnitude.
    ///
    /// Ties go to `a`. Peak extraction depends on this ordering being stable,
    /// so do not swap the comparison.
    pub fn max(a: Self, b: Self) -> Self {
        if a.magnitude() >= b.magnitude() { a } else { b }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Complex::add(self, rhs)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.im < 0.0 {
            write!(f, "{}-{}i", self.0.re, -self.0.im)
        } else {
            write!(f, "{}+{}i", self.0.re, self.0.im)
        }
    }
}

impl From<Complex64> for Complex {
    fn from(value: Complex64) -> Self {
        Self(value)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Self {
        value.0
    }
}
