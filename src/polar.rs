use std::f64::consts::PI;
use std::fmt;
use serde::Serialize;

/// Complex number as a magnitude and an angle in radians. The stored
/// angle is raw, reduction into `(-PI, PI]` happens on every read of
/// [`phase`](PolarComplex::phase); display shows the stored value.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PolarComplex {
  pub(crate) r: f64,
  pub(crate) theta: f64,
}

impl PolarComplex {
  pub fn new (r: f64, theta: f64) -> Self {
    Self { r, theta }
  }

  /// Stored magnitude, returned verbatim. A negative value is a
  /// genuine scale factor, the sign is not folded into the angle.
  pub fn magnitude (&self) -> f64 {
    self.r
  }

  /// Stored angle reduced into `(-PI, PI]`.
  pub fn phase (&self) -> f64 {
    let mut theta = self.theta;
    // an infinite angle would never leave the loops below
    if !theta.is_finite() {
      return theta;
    }
    while theta > PI {
      theta -= 2_f64 * PI;
    }
    while theta < -PI {
      theta += 2_f64 * PI;
    }
    // -PI folds onto the included PI endpoint
    if theta == -PI {
      theta = PI;
    }
    theta
  }

  pub fn conjugate (&self) -> Self {
    Self::new(self.r, -self.theta)
  }
}

impl fmt::Display for PolarComplex {
  fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}(e^{}i)", self.r, self.theta)
  }
}
