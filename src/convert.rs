use crate::polar::PolarComplex;
use crate::rect::RectComplex;

/// Capability surface shared by the two representations. The operator
/// matrix in [`crate::ops`] calls these to bring mixed-form operands
/// into an operator's canonical form without caring which form they
/// started in; conversion to the operand's own form is the identity.
pub trait ComplexForm {
  fn to_rect (&self) -> RectComplex;
  fn to_polar (&self) -> PolarComplex;
  fn magnitude (&self) -> f64;
  fn phase (&self) -> f64;
}

impl ComplexForm for RectComplex {
  fn to_rect (&self) -> RectComplex {
    *self
  }

  fn to_polar (&self) -> PolarComplex {
    PolarComplex::new(self.magnitude(), self.phase())
  }

  fn magnitude (&self) -> f64 {
    RectComplex::magnitude(self)
  }

  fn phase (&self) -> f64 {
    RectComplex::phase(self)
  }
}

impl ComplexForm for PolarComplex {
  fn to_rect (&self) -> RectComplex {
    let sin = self.theta.sin();
    let cos = self.theta.cos();
    // at an axis-aligned angle the other trig term carries rounding
    // noise where the component should be exactly zero
    if sin.abs() == 1_f64 || cos.abs() == 1_f64 {
      if cos.abs() == 1_f64 {
        RectComplex::new(self.r * cos, 0_f64)
      } else {
        RectComplex::new(0_f64, self.r * sin)
      }
    } else {
      RectComplex::new(self.r * cos, self.r * sin)
    }
  }

  fn to_polar (&self) -> PolarComplex {
    *self
  }

  fn magnitude (&self) -> f64 {
    PolarComplex::magnitude(self)
  }

  fn phase (&self) -> f64 {
    PolarComplex::phase(self)
  }
}
