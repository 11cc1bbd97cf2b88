use num::complex::Complex;

type Complex64 = Complex<f64>;


/// IEEE-754 class of a real argument, as seen by the entry points of this crate.
/// Every public function classifies its arguments before picking an algorithm, so that
/// non-finite inputs never reach a series or continued fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatClass {
    Nan,
    PosInfinity,
    NegInfinity,
    /// +0 or -0; the sign is still carried by the value itself.
    Zero,
    Finite,
}


impl FloatClass {

    pub fn of(x: f64) -> Self {
        if x.is_nan() {
            FloatClass::Nan
        } else if x.is_infinite() {
            if x > 0.0 {
                FloatClass::PosInfinity
            } else {
                FloatClass::NegInfinity
            }
        } else if x == 0.0 {
            FloatClass::Zero
        } else {
            FloatClass::Finite
        }
    }

    pub fn is_nan(self) -> bool {
        self == FloatClass::Nan
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, FloatClass::PosInfinity | FloatClass::NegInfinity)
    }
}




/// Component-wise class of a complex argument.
/// NaN wins over infinity: a + bi is NaN if either part is NaN, infinite if either part is
/// infinite and neither is NaN, and zero only if both parts are (signed) zeros.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplexClass {
    Nan,
    Infinite,
    Zero,
    Finite,
}


impl ComplexClass {

    pub fn of(z: Complex64) -> Self {
        let re = FloatClass::of(z.re);
        let im = FloatClass::of(z.im);
        if re.is_nan() || im.is_nan() {
            ComplexClass::Nan
        } else if re.is_infinite() || im.is_infinite() {
            ComplexClass::Infinite
        } else if re == FloatClass::Zero && im == FloatClass::Zero {
            ComplexClass::Zero
        } else {
            ComplexClass::Finite
        }
    }
}




// NaN result for a NaN argument of an odd function (erf, dawson): a component that is an
// exact zero in the argument stays that same signed zero in the result, everything else is NaN.
// This matches the limits along the real and imaginary axes, where the odd functions map
// the axis onto itself.

pub fn nan_keeping_zero_parts(z: Complex64) -> Complex64 {
    Complex64::new(
        if z.re == 0.0 { z.re } else { f64::NAN },
        if z.im == 0.0 { z.im } else { f64::NAN },
    )
}
