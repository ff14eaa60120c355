use std::ops::{Add, Div, Mul, Sub};
use crate::convert::ComplexForm;
use crate::polar::PolarComplex;
use crate::rect::RectComplex;

/// Exponentiation over the operand matrix. `a.pow(b)` follows the form
/// of the base: a rectangular base yields a rectangular result, a polar
/// base a polar one.
pub trait Pow<Rhs> {
  type Output;

  fn pow (self, exponent: Rhs) -> Self::Output;
}

// addition: canonical form is rectangular, the result stays rectangular
// unless both operands were polar

impl Add for RectComplex {
  type Output = RectComplex;

  fn add (self, rhs: Self) -> Self::Output {
    RectComplex::new(self.re + rhs.re, self.im + rhs.im)
  }
}

impl Add<PolarComplex> for RectComplex {
  type Output = RectComplex;

  fn add (self, rhs: PolarComplex) -> Self::Output {
    self + rhs.to_rect()
  }
}

impl Add<RectComplex> for PolarComplex {
  type Output = RectComplex;

  fn add (self, rhs: RectComplex) -> Self::Output {
    rhs + self
  }
}

impl Add for PolarComplex {
  type Output = PolarComplex;

  fn add (self, rhs: Self) -> Self::Output {
    (self.to_rect() + rhs.to_rect()).to_polar()
  }
}

impl Add<f64> for RectComplex {
  type Output = RectComplex;

  fn add (self, rhs: f64) -> Self::Output {
    self + RectComplex::new(rhs, 0_f64)
  }
}

impl Add<RectComplex> for f64 {
  type Output = RectComplex;

  fn add (self, rhs: RectComplex) -> Self::Output {
    rhs + self
  }
}

impl Add<f64> for PolarComplex {
  type Output = PolarComplex;

  fn add (self, rhs: f64) -> Self::Output {
    (self.to_rect() + rhs).to_polar()
  }
}

impl Add<PolarComplex> for f64 {
  type Output = PolarComplex;

  fn add (self, rhs: PolarComplex) -> Self::Output {
    rhs + self
  }
}

// subtraction: same canonical and output rules as addition, but the
// swapped-order overloads must keep operand order instead of commuting

impl Sub for RectComplex {
  type Output = RectComplex;

  fn sub (self, rhs: Self) -> Self::Output {
    RectComplex::new(self.re - rhs.re, self.im - rhs.im)
  }
}

impl Sub<PolarComplex> for RectComplex {
  type Output = RectComplex;

  fn sub (self, rhs: PolarComplex) -> Self::Output {
    self - rhs.to_rect()
  }
}

impl Sub<RectComplex> for PolarComplex {
  type Output = RectComplex;

  fn sub (self, rhs: RectComplex) -> Self::Output {
    self.to_rect() - rhs
  }
}

impl Sub for PolarComplex {
  type Output = PolarComplex;

  fn sub (self, rhs: Self) -> Self::Output {
    (self.to_rect() - rhs.to_rect()).to_polar()
  }
}

impl Sub<f64> for RectComplex {
  type Output = RectComplex;

  fn sub (self, rhs: f64) -> Self::Output {
    RectComplex::new(self.re - rhs, self.im)
  }
}

impl Sub<RectComplex> for f64 {
  type Output = RectComplex;

  fn sub (self, rhs: RectComplex) -> Self::Output {
    RectComplex::new(self - rhs.re, -rhs.im)
  }
}

impl Sub<f64> for PolarComplex {
  type Output = PolarComplex;

  fn sub (self, rhs: f64) -> Self::Output {
    (self.to_rect() - rhs).to_polar()
  }
}

impl Sub<PolarComplex> for f64 {
  type Output = PolarComplex;

  fn sub (self, rhs: PolarComplex) -> Self::Output {
    (self - rhs.to_rect()).to_polar()
  }
}

// multiplication: rectangular canonical form, except that two polar
// operands multiply on raw magnitudes and angles with no trig at all

impl Mul for RectComplex {
  type Output = RectComplex;

  fn mul (self, rhs: Self) -> Self::Output {
    RectComplex::new(
      self.re * rhs.re - self.im * rhs.im,
      self.re * rhs.im + self.im * rhs.re,
    )
  }
}

impl Mul<PolarComplex> for RectComplex {
  type Output = RectComplex;

  fn mul (self, rhs: PolarComplex) -> Self::Output {
    self * rhs.to_rect()
  }
}

impl Mul<RectComplex> for PolarComplex {
  type Output = RectComplex;

  fn mul (self, rhs: RectComplex) -> Self::Output {
    rhs * self
  }
}

impl Mul for PolarComplex {
  type Output = PolarComplex;

  fn mul (self, rhs: Self) -> Self::Output {
    PolarComplex::new(self.r * rhs.r, self.theta + rhs.theta)
  }
}

impl Mul<f64> for RectComplex {
  type Output = RectComplex;

  fn mul (self, rhs: f64) -> Self::Output {
    RectComplex::new(self.re * rhs, self.im * rhs)
  }
}

impl Mul<RectComplex> for f64 {
  type Output = RectComplex;

  fn mul (self, rhs: RectComplex) -> Self::Output {
    rhs * self
  }
}

impl Mul<f64> for PolarComplex {
  type Output = PolarComplex;

  fn mul (self, rhs: f64) -> Self::Output {
    PolarComplex::new(self.r * rhs, self.theta)
  }
}

impl Mul<PolarComplex> for f64 {
  type Output = PolarComplex;

  fn mul (self, rhs: PolarComplex) -> Self::Output {
    rhs * self
  }
}

// division mirrors multiplication: the rectangular path goes through
// polar form, two polar operands divide directly. a zero-magnitude
// divisor yields infinite or NaN components per IEEE semantics

impl Div for RectComplex {
  type Output = RectComplex;

  fn div (self, rhs: Self) -> Self::Output {
    PolarComplex::new(self.magnitude() / rhs.magnitude(), self.phase() - rhs.phase()).to_rect()
  }
}

impl Div<PolarComplex> for RectComplex {
  type Output = RectComplex;

  fn div (self, rhs: PolarComplex) -> Self::Output {
    self / rhs.to_rect()
  }
}

impl Div<RectComplex> for PolarComplex {
  type Output = RectComplex;

  fn div (self, rhs: RectComplex) -> Self::Output {
    self.to_rect() / rhs
  }
}

impl Div for PolarComplex {
  type Output = PolarComplex;

  fn div (self, rhs: Self) -> Self::Output {
    PolarComplex::new(self.r / rhs.r, self.theta - rhs.theta)
  }
}

impl Div<f64> for RectComplex {
  type Output = RectComplex;

  fn div (self, rhs: f64) -> Self::Output {
    self / RectComplex::new(rhs, 0_f64)
  }
}

impl Div<RectComplex> for f64 {
  type Output = RectComplex;

  fn div (self, rhs: RectComplex) -> Self::Output {
    RectComplex::new(self, 0_f64) / rhs
  }
}

impl Div<f64> for PolarComplex {
  type Output = PolarComplex;

  fn div (self, rhs: f64) -> Self::Output {
    PolarComplex::new(self.r / rhs, self.theta)
  }
}

impl Div<PolarComplex> for f64 {
  type Output = PolarComplex;

  fn div (self, rhs: PolarComplex) -> Self::Output {
    PolarComplex::new(self / rhs.r, -rhs.theta)
  }
}

// a^b = e^(b ln a) with ln a = ln|a| + i phase(a). a zero-magnitude
// base feeds ln(0) = -inf through the complex multiply and comes out
// as NaN components

impl Pow<RectComplex> for RectComplex {
  type Output = RectComplex;

  fn pow (self, exponent: RectComplex) -> Self::Output {
    let z = RectComplex::new(self.magnitude().ln(), self.phase()) * exponent;
    PolarComplex::new(z.re.exp(), z.im).to_rect()
  }
}

impl Pow<PolarComplex> for RectComplex {
  type Output = RectComplex;

  fn pow (self, exponent: PolarComplex) -> Self::Output {
    self.pow(exponent.to_rect())
  }
}

impl Pow<RectComplex> for PolarComplex {
  type Output = PolarComplex;

  fn pow (self, exponent: RectComplex) -> Self::Output {
    self.to_rect().pow(exponent).to_polar()
  }
}

impl Pow<PolarComplex> for PolarComplex {
  type Output = PolarComplex;

  fn pow (self, exponent: PolarComplex) -> Self::Output {
    self.to_rect().pow(exponent.to_rect()).to_polar()
  }
}

impl Pow<f64> for RectComplex {
  type Output = RectComplex;

  fn pow (self, exponent: f64) -> Self::Output {
    let z = self.to_polar();
    PolarComplex::new(z.r.powf(exponent), z.theta * exponent).to_rect()
  }
}

// real base: a^(x + yi) = a^x e^(iy ln a), defined for a > 0 only;
// ln of a non-positive base is NaN or -inf and propagates

impl Pow<RectComplex> for f64 {
  type Output = RectComplex;

  fn pow (self, exponent: RectComplex) -> Self::Output {
    PolarComplex::new(self.powf(exponent.re), exponent.im * self.ln()).to_rect()
  }
}

impl Pow<f64> for PolarComplex {
  type Output = PolarComplex;

  fn pow (self, exponent: f64) -> Self::Output {
    PolarComplex::new(self.r.powf(exponent), self.theta * exponent)
  }
}

impl Pow<PolarComplex> for f64 {
  type Output = PolarComplex;

  fn pow (self, exponent: PolarComplex) -> Self::Output {
    self.pow(exponent.to_rect()).to_polar()
  }
}
