use std::f64::consts::PI;
use std::fmt;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RectComplex {
  pub re: f64,
  pub im: f64,
}

pub const I: RectComplex = RectComplex { re: 0_f64, im: 1_f64 };

impl RectComplex {
  pub fn zero () -> Self {
    Self::new(0_f64, 0_f64)
  }

  pub fn one () -> Self {
    Self::new(1_f64, 0_f64)
  }

  pub fn new (re: f64, im: f64) -> Self {
    Self { re, im }
  }

  /// Distance from the origin. On either axis this is `abs` of the
  /// nonzero component, so purely real and purely imaginary values
  /// pick up no square-root rounding.
  pub fn magnitude (&self) -> f64 {
    if self.im == 0_f64 {
      self.re.abs()
    } else if self.re == 0_f64 {
      self.im.abs()
    } else {
      (self.re * self.re + self.im * self.im).sqrt()
    }
  }

  /// Angle from the positive real axis, in `(-PI, PI]`.
  pub fn phase (&self) -> f64 {
    // atan only covers the right half-plane, the left one is shifted
    // into range by a half turn
    let mut theta = (self.im / self.re).atan();
    if self.re < 0_f64 {
      if self.im >= 0_f64 {
        theta += PI;
      } else {
        theta -= PI;
      }
    }
    theta
  }

  pub fn conjugate (&self) -> Self {
    Self::new(self.re, -self.im)
  }
}

impl fmt::Display for RectComplex {
  fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.im < 0_f64 {
      write!(f, "{} - {}i", self.re, -self.im)
    } else {
      write!(f, "{} + {}i", self.re, self.im)
    }
  }
}
